//! Upload storage
//!
//! Decodes uploaded payloads, resolves their target path below a declared
//! base directory and writes them to disk.

pub mod filesystem;
pub mod operations;
pub mod payload;
pub mod request;
pub mod results;
pub mod validation;

pub use operations::save_upload;
pub use payload::decode_payload;
pub use request::UploadRequest;
pub use results::SavedFile;
pub use validation::{normalize_lexically, resolve_upload_path};
