//! Configuration management for RAX Clip Server
//!
//! Values are layered: built-in defaults, then `config.toml` (or the file
//! named by `--config`), then `RAX_CLIP_*` environment variables, then
//! command-line flags.

use std::path::PathBuf;

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default configuration file, looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "config";

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Push text, images and files from a browser to this host", long_about = None)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short = 'f', long, env = "RAX_CLIP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Clipboard implementation used by the server
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// Shell out to `xclip`
    #[default]
    Xclip,
    /// Keep the clipboard in process memory
    Memory,
}

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    // ═══ NETWORK ═══
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    // ═══ UPLOADS ═══
    /// Base directory used when an upload does not declare one
    pub default_base_path: String,

    /// Request body limit in MB
    pub max_body_size_mb: usize,

    // ═══ CLIPBOARD ═══
    pub clipboard_backend: ClipboardBackend,

    /// xclip executable, looked up on `PATH` unless it contains a separator
    pub xclip_program: String,

    /// Where pasted images are staged before handing them to xclip
    pub image_temp_path: String,

    /// Convert CRLF / CR to LF before copying submitted text
    pub normalize_line_endings: bool,

    /// X display for xclip; falls back to `$DISPLAY`, then `:0`
    pub display: Option<String>,

    /// Xauthority file for xclip; falls back to `~/.Xauthority`
    pub xauthority: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5555,
            default_base_path: "/var/www/html/wordpress/files/".to_string(),
            max_body_size_mb: 100,
            clipboard_backend: ClipboardBackend::default(),
            xclip_program: "xclip".to_string(),
            image_temp_path: "/tmp/uploaded_image.png".to_string(),
            normalize_line_endings: true,
            display: None,
            xauthority: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment, then apply CLI overrides
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("RAX_CLIP").try_parsing(true))
            .build()?;

        let mut config: ServerConfig = settings.try_deserialize()?;
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Command-line flags take precedence over every other source
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(host) = &args.host {
            self.bind_address = host.clone();
        }
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.bind_address.is_empty() {
            return Err(ConfigError::Message("bind_address cannot be empty".into()));
        }

        if self.default_base_path.is_empty() {
            return Err(ConfigError::Message(
                "default_base_path cannot be empty".into(),
            ));
        }

        if self.xclip_program.is_empty() {
            return Err(ConfigError::Message("xclip_program cannot be empty".into()));
        }

        if self.image_temp_path.is_empty() {
            return Err(ConfigError::Message(
                "image_temp_path cannot be empty".into(),
            ));
        }

        if self.max_body_size_mb == 0 {
            return Err(ConfigError::Message(
                "max_body_size_mb must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as socket address
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Get the request body limit in bytes
    pub fn max_body_size_bytes(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }

    pub fn image_temp_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.image_temp_path)
    }
}
