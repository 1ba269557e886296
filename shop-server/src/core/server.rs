//! Server Implementation
//!
//! HTTP 服务器启动和管理

use tokio::net::TcpListener;

use crate::core::{Config, Result, ServerState};
use crate::routes;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server around an initialized state (database already open)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind the listener and serve until Ctrl-C / SIGTERM
    ///
    /// In-flight requests finish before this returns.
    pub async fn run(self) -> Result<()> {
        let Self { config, state } = self;

        let app = routes::build_app(&state).with_state(state.clone());

        let addr = config.listen_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("🛒 Shop server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        drop(state);
        tracing::info!("Server stopped, database connection closed");
        Ok(())
    }
}

/// Resolve on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down...");
}
