use tokio::signal;
use tracing::info;

#[cfg(unix)]
use signal::unix::{signal, SignalKind};

/// Signal types that can trigger shutdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGTERM - Docker/Kubernetes graceful shutdown
    Terminate,
    /// SIGINT - Ctrl+C interactive shutdown
    Interrupt,
}

impl std::fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
        }
    }
}

/// Wait for SIGTERM or SIGINT and return which one was received.
///
/// # Errors
/// Fails if the signal handlers cannot be registered.
#[cfg(unix)]
pub async fn wait_for_shutdown() -> std::io::Result<ShutdownSignal> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let received = tokio::select! {
        _ = sigterm.recv() => ShutdownSignal::Terminate,
        _ = sigint.recv() => ShutdownSignal::Interrupt,
    };
    info!("Received shutdown signal: {}", received);
    Ok(received)
}

#[cfg(not(unix))]
pub async fn wait_for_shutdown() -> std::io::Result<ShutdownSignal> {
    signal::ctrl_c().await?;
    info!("Received shutdown signal: {}", ShutdownSignal::Interrupt);
    Ok(ShutdownSignal::Interrupt)
}
