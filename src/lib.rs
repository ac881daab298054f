pub mod clipboard;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod storage;
pub mod utils;

pub use server::Server;
