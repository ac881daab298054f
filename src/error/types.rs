//! Error types
//!
//! Defines domain-specific error types for each module of the clipboard server.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Upload module errors
#[derive(Debug, Error)]
pub enum UploadError {
    /// A required request field is empty or the request cannot name a file
    #[error("{0}")]
    Validation(String),

    /// The payload is not valid base64
    #[error("{0}")]
    Decode(#[from] base64::DecodeError),

    /// The resolved path leaves the declared base directory
    #[error("Path traversal blocked")]
    PathTraversal(PathBuf),

    /// Directory creation or write failure
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Clipboard module errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("{0} not installed")]
    UtilityMissing(String),

    #[error("Failed to {operation}:\n{stderr}")]
    CommandFailed {
        operation: &'static str,
        stderr: String,
    },

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("Clipboard content is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// General server error that encompasses all error types
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
