//! Clipboard read endpoint

use axum::Json;
use axum::extract::State;
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::server::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ClipboardText {
    pub text: String,
}

/// `GET /get_clipboard`
///
/// Always answers 200; a failure is reported inside `text` so the page can
/// show it in place of the clipboard contents.
pub async fn get_clipboard(State(state): State<AppState>) -> Json<ClipboardText> {
    match state.clipboard.get_text().await {
        Ok(text) => {
            info!("Clipboard content requested: {} characters", text.chars().count());
            Json(ClipboardText { text })
        }
        Err(e) => {
            error!("Failed to get clipboard: {e}");
            Json(ClipboardText {
                text: format!("Error: {e}"),
            })
        }
    }
}
