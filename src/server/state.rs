//! Shared handler state

use std::sync::Arc;

use minijinja::Environment;
use tokio::sync::RwLock;

use crate::clipboard::{self, ClipboardSink};
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::handlers::page;

/// State cloned into every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub clipboard: Arc<dyn ClipboardSink>,
    /// Last text submitted through the page, shown back on render
    pub last_text: Arc<RwLock<String>>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    /// Builds state with the clipboard backend selected in `config`
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let clipboard = clipboard::from_config(&config);
        Self::with_clipboard(config, clipboard)
    }

    /// Builds state around an explicit clipboard implementation
    pub fn with_clipboard(
        config: ServerConfig,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Result<Self, ServerError> {
        Ok(Self {
            config: Arc::new(config),
            clipboard,
            last_text: Arc::new(RwLock::new(String::new())),
            templates: Arc::new(page::template_environment()?),
        })
    }
}
