//! File upload endpoint

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tokio::task::JoinError;

use crate::error::{ServerError, UploadError};
use crate::server::state::AppState;
use crate::storage::{UploadRequest, save_upload};

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedResponse {
    pub saved: String,
}

/// `POST /send_to_files`
///
/// The body is read as JSON whatever `Content-Type` the client declares.
pub async fn send_to_files(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SavedResponse>, ServerError> {
    let request: UploadRequest = serde_json::from_slice(&body)
        .map_err(|e| UploadError::Validation(format!("Invalid JSON body: {e}")))?;

    let base_path = request
        .base_path
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| state.config.default_base_path.clone());
    let rel_path = request.rel_path;
    let data = request.data;

    let saved = tokio::task::spawn_blocking(move || save_upload(&base_path, &rel_path, &data))
        .await
        .map_err(write_task_failed)??;

    Ok(Json(SavedResponse {
        saved: saved.path.display().to_string(),
    }))
}

/// A panicked or cancelled write still answers with the JSON error body
fn write_task_failed(e: JoinError) -> UploadError {
    UploadError::Io(std::io::Error::other(format!("Upload task failed: {e}")))
}
