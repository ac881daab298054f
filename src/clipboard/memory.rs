//! In-process clipboard
//!
//! Keeps the clipboard in memory. Selected with `clipboard_backend = "memory"`
//! on headless hosts and used by the test suite.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::clipboard::ClipboardSink;
use crate::error::ClipboardError;

#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    text: Mutex<String>,
    image: Mutex<Option<Vec<u8>>>,
}

impl InMemoryClipboard {
    /// The most recent image placed on the clipboard, if any
    pub async fn image(&self) -> Option<Vec<u8>> {
        self.image.lock().await.clone()
    }
}

#[async_trait]
impl ClipboardSink for InMemoryClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.text.lock().await = text.to_owned();
        *self.image.lock().await = None;
        Ok(())
    }

    async fn set_image(&self, png: &[u8]) -> Result<(), ClipboardError> {
        *self.image.lock().await = Some(png.to_vec());
        self.text.lock().await.clear();
        Ok(())
    }

    async fn get_text(&self) -> Result<String, ClipboardError> {
        Ok(self.text.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn text_round_trips() {
        let clipboard = InMemoryClipboard::default();
        clipboard.set_text("copied").await.unwrap();
        assert_eq!(clipboard.get_text().await.unwrap(), "copied");
    }

    #[tokio::test]
    async fn image_replaces_text() {
        let clipboard = InMemoryClipboard::default();
        clipboard.set_text("copied").await.unwrap();
        clipboard.set_image(&[0x89, b'P', b'N', b'G']).await.unwrap();

        assert_eq!(clipboard.get_text().await.unwrap(), "");
        assert_eq!(clipboard.image().await, Some(vec![0x89, b'P', b'N', b'G']));
    }
}
