//! HTTP request handlers

pub mod clipboard;
pub mod page;
pub mod upload;
