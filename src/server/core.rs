use std::net::SocketAddr;

use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::server::routes::build_router;
use crate::server::state::AppState;

pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Binds the listener and prepares the router
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let socket = config.listen_socket();
        let listener = TcpListener::bind(&socket).await?;
        info!("Server bound to {}", listener.local_addr()?);

        info!(
            "Clipboard backend: {:?}, default upload directory: {}",
            config.clipboard_backend, config.default_base_path
        );

        let state = AppState::new(config)?;

        Ok(Self {
            listener,
            router: build_router(state),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves requests until Ctrl-C
    pub async fn start(self) -> Result<(), ServerError> {
        info!("Starting clipboard server on {}", self.local_addr()?);

        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
