//! Error handlers
//!
//! Maps errors onto HTTP status codes and response bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{debug, error, warn};
use serde_json::json;

use crate::error::types::{ServerError, UploadError};

impl UploadError {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadError::Validation(_) => StatusCode::BAD_REQUEST,
            UploadError::PathTraversal(_) => StatusCode::FORBIDDEN,
            UploadError::Decode(_) | UploadError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match &self {
            UploadError::Validation(msg) => debug!("Rejected upload: {msg}"),
            UploadError::PathTraversal(path) => {
                warn!("Path traversal blocked: {}", path.display())
            }
            UploadError::Decode(e) => error!("Failed to decode upload payload: {e}"),
            UploadError::Io(e) => error!("Failed to save file: {e}"),
        }

        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl ServerError {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Upload(e) => e.status_code(),
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Clipboard(_)
            | ServerError::Template(_)
            | ServerError::Config(_)
            | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Upload(e) => e.into_response(),
            ServerError::BadRequest(msg) => {
                debug!("Bad request: {msg}");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            // Clipboard messages are shown to the browser verbatim
            ServerError::Clipboard(e) => {
                error!("Clipboard error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            other => {
                error!("Server error: {other}");
                (
                    other.status_code(),
                    format!("Server error:\n{other}"),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::ClipboardError;
    use std::path::PathBuf;

    #[test]
    fn upload_errors_map_to_http_status() {
        assert_eq!(
            UploadError::Validation("rel_path is empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UploadError::PathTraversal(PathBuf::from("/etc/passwd")).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            UploadError::Io(std::io::Error::other("disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn traversal_message_hides_resolved_path() {
        let err = UploadError::PathTraversal(PathBuf::from("/etc/passwd"));
        assert_eq!(err.to_string(), "Path traversal blocked");
    }

    #[test]
    fn server_error_delegates_upload_status() {
        let err = ServerError::from(UploadError::Validation("no data".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_utility_message() {
        let err = ClipboardError::UtilityMissing("xclip".into());
        assert_eq!(err.to_string(), "xclip not installed");
    }
}
