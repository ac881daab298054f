//! Upload request wire type

use serde::{Deserialize, Serialize};

/// A single file upload as posted by the browser.
///
/// Missing fields deserialize to empty values so that the handler reports
/// them as validation errors instead of JSON parse failures.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UploadRequest {
    /// Target directory on the host; the configured default is used when absent
    #[serde(default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub rel_path: String,
    /// Data URI or bare base64
    #[serde(default)]
    pub data: String,
}
