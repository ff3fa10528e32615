pub mod error;
pub mod route;
pub mod types;

use crate::core::config::Config;
use crate::types::params::ServerParams;
use crate::{server::route::server_router, WorkforceResult};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub use error::WorkerRouteError;

/// Handle for managing the HTTP server lifecycle.
pub struct ServerHandle {
    shutdown_token: CancellationToken,
    task_handle: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// Initiates graceful shutdown and waits for the server to stop.
    ///
    /// This will:
    /// 1. Signal the server to stop accepting new connections
    /// 2. Wait for in-flight requests to complete
    /// 3. Return when the server has fully stopped
    pub async fn shutdown(self) -> WorkforceResult<()> {
        info!("Initiating server graceful shutdown");
        self.shutdown_token.cancel();
        self.task_handle.await??;
        Ok(())
    }
}

/// Binds the listener and starts serving the worker routes in a separate task.
///
/// # Returns
/// * `(SocketAddr, ServerHandle)` - The bound address and handle for managing the server
///
/// # Errors
/// * If the address cannot be bound
pub async fn setup_server(config: Arc<Config>) -> WorkforceResult<(SocketAddr, ServerHandle)> {
    let (api_server_url, listener) = get_server_url(config.server_config()).await?;

    let shutdown_token = CancellationToken::new();
    let server_token = shutdown_token.clone();

    let app = server_router(config);
    let task_handle = tokio::spawn(async move {
        let result = axum::serve(listener, app).with_graceful_shutdown(server_token.cancelled_owned()).await;
        if let Err(e) = &result {
            error!(error = %e, "HTTP server stopped with an error");
        }
        result
    });

    info!("Listening on http://{}", api_server_url);
    let handle = ServerHandle { shutdown_token, task_handle };

    Ok((api_server_url, handle))
}

pub(crate) async fn get_server_url(
    server_params: &ServerParams,
) -> WorkforceResult<(SocketAddr, tokio::net::TcpListener)> {
    let address = format!("{}:{}", server_params.host, server_params.port);
    let listener = tokio::net::TcpListener::bind(address).await?;
    let api_server_url = listener.local_addr()?;

    Ok((api_server_url, listener))
}
