use async_trait::async_trait;

use crate::core::client::database::error::DatabaseError;
use crate::types::worker::Worker;

/// Storage of worker records keyed by email.
///
/// Implementations do not validate records; callers go through
/// [`crate::service::worker::WorkerService`] for that.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkerRepository: Send + Sync {
    /// Insert a new worker. An existing email yields [`DatabaseError::ItemAlreadyExists`].
    async fn create_worker(&self, worker: Worker) -> Result<(), DatabaseError>;

    /// Replace the whole record stored under `worker.email`.
    /// Returns `false` when no record matched.
    async fn replace_worker(&self, worker: Worker) -> Result<bool, DatabaseError>;

    /// Delete the record stored under `email`, returning how many were removed.
    async fn delete_worker(&self, email: &str) -> Result<u64, DatabaseError>;

    async fn get_worker_by_email(&self, email: &str) -> Result<Option<Worker>, DatabaseError>;

    /// Release the underlying connections
    async fn disconnect(&self) -> Result<(), DatabaseError>;
}
