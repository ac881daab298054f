//! Server core functionality
//!
//! Listener, router and shared state of the clipboard server.

pub mod core;
pub mod routes;
pub mod state;

pub use self::core::Server;
pub use routes::build_router;
pub use state::AppState;
