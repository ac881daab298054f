//! HTTP routes

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};

use crate::handlers::{clipboard, page, upload};
use crate::middleware::logging::log_request;
use crate::server::state::AppState;

/// Assembles the application router
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_size_bytes();

    Router::new()
        .route("/", get(page::index).post(page::submit))
        .route("/get_clipboard", get(clipboard::get_clipboard))
        .route("/send_to_files", post(upload::send_to_files))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
