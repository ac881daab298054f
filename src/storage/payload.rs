//! Upload payload decoding
//!
//! Accepts either a `data:<mime>;base64,<payload>` URI or a bare base64 blob.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::UploadError;

/// Returns the base64 portion of a payload: everything after the first `,`
/// when one is present, otherwise the whole string.
pub fn base64_portion(data: &str) -> &str {
    match data.split_once(',') {
        Some((_header, encoded)) => encoded,
        None => data,
    }
}

/// Decodes an upload payload into raw bytes
pub fn decode_payload(data: &str) -> Result<Vec<u8>, UploadError> {
    let encoded = base64_portion(data).trim();
    Ok(STANDARD.decode(encoded)?)
}
