//! Clipboard capability
//!
//! The server only talks to the host clipboard through [`ClipboardSink`],
//! so handlers can be exercised without a display server.

pub mod memory;
pub mod text;
pub mod xclip;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{ClipboardBackend, ServerConfig};
use crate::error::ClipboardError;

pub use memory::InMemoryClipboard;
pub use text::normalize_line_endings;
pub use xclip::XclipClipboard;

#[async_trait]
pub trait ClipboardSink: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Replace the clipboard contents with a PNG image
    async fn set_image(&self, png: &[u8]) -> Result<(), ClipboardError>;

    /// Read the current clipboard text
    async fn get_text(&self) -> Result<String, ClipboardError>;
}

/// Builds the clipboard backend selected in the configuration
pub fn from_config(config: &ServerConfig) -> Arc<dyn ClipboardSink> {
    match config.clipboard_backend {
        ClipboardBackend::Xclip => Arc::new(XclipClipboard::from_config(config)),
        ClipboardBackend::Memory => Arc::new(InMemoryClipboard::default()),
    }
}
