//! File system operations
//!
//! Thin wrappers over `std::fs` used by the upload writer.

use std::fs;
use std::io::Result;
use std::path::Path;

/// Create every missing parent directory of `path`
pub fn create_parent_directories(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Write `bytes` to `path`, truncating any existing file
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)
}
