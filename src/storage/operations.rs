//! Storage operations
//!
//! Decode, resolve, validate and write one uploaded file.

use log::info;

use crate::error::UploadError;
use crate::storage::filesystem::{create_parent_directories, write_file};
use crate::storage::payload::decode_payload;
use crate::storage::results::SavedFile;
use crate::storage::validation::resolve_upload_path;

/// Saves one uploaded file below `base_path`.
///
/// Runs fully synchronously. Nothing is written unless the resolved path
/// stays inside `base_path`. A failed write may leave a truncated file.
pub fn save_upload(base_path: &str, rel_path: &str, data: &str) -> Result<SavedFile, UploadError> {
    if rel_path.is_empty() {
        return Err(UploadError::Validation("rel_path is empty".into()));
    }
    if data.is_empty() {
        return Err(UploadError::Validation("no data".into()));
    }

    let bytes = decode_payload(data)?;
    let path = resolve_upload_path(base_path, rel_path)?;

    create_parent_directories(&path)?;
    write_file(&path, &bytes)?;

    info!("File saved: {} ({} bytes)", path.display(), bytes.len());

    Ok(SavedFile {
        path,
        bytes: bytes.len(),
    })
}
