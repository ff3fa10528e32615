use tracing::{debug, instrument};

use crate::core::config::Config;
use crate::error::WorkerError;
use crate::types::worker::Worker;

/// Validation and persistence of worker records.
///
/// Every operation issues at most one repository call and never retries.
/// Failures map to a status code through [`WorkerError::status_code`]:
///
/// | Operation | 400 | 404 | 500 |
/// |---|---|---|---|
/// | create | invalid record | - | store failure, existing email |
/// | update | invalid record | unknown email | store failure |
/// | delete | - | - | store failure |
/// | read | - | unknown email | store failure |
pub struct WorkerService;

impl WorkerService {
    /// Validates and inserts a new worker.
    #[instrument(skip_all, fields(email = %worker.email))]
    pub async fn create_worker(worker: Worker, config: &Config) -> Result<(), WorkerError> {
        worker.validate()?;
        config.database().create_worker(worker).await?;
        Ok(())
    }

    /// Validates the worker and replaces every field of the stored record.
    ///
    /// # Errors
    /// [`WorkerError::NotFound`] when nothing is stored under the email.
    #[instrument(skip_all, fields(email = %worker.email))]
    pub async fn update_worker(worker: Worker, config: &Config) -> Result<(), WorkerError> {
        worker.validate()?;
        let email = worker.email.clone();
        if !config.database().replace_worker(worker).await? {
            return Err(WorkerError::NotFound(email));
        }
        Ok(())
    }

    /// Deletes the worker stored under `email`. Deleting an unknown email succeeds.
    #[instrument(skip(config))]
    pub async fn delete_worker(email: &str, config: &Config) -> Result<(), WorkerError> {
        let deleted = config.database().delete_worker(email).await?;
        debug!(deleted, "Delete completed");
        Ok(())
    }

    #[instrument(skip(config))]
    pub async fn get_worker(email: &str, config: &Config) -> Result<Worker, WorkerError> {
        config.database().get_worker_by_email(email).await?.ok_or_else(|| WorkerError::NotFound(email.to_string()))
    }
}
