pub mod worker;

use thiserror::Error;

use crate::core::client::database::DatabaseError;
pub use worker::WorkerError;

/// Result type for workforce operations
pub type WorkforceResult<T> = Result<T, WorkforceError>;

/// Error types for the workforce service
#[derive(Error, Debug)]
pub enum WorkforceError {
    #[error("Database error: {0}")]
    DatabaseCoreError(#[from] DatabaseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error while installing the logger or the panic hook
    #[error("Logging setup error: {0}")]
    LoggingError(String),

    /// The listener could not be bound or the server stopped with an I/O error
    #[error("Server error: {0}")]
    ServerError(#[from] std::io::Error),

    #[error("Server task error: {0}")]
    ServerTaskError(#[from] tokio::task::JoinError),
}
