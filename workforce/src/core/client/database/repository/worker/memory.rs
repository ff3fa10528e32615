use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::mongo::WorkerDocument;
use super::r#trait::WorkerRepository;
use crate::core::client::database::error::DatabaseError;
use crate::types::worker::Worker;

/// Process-local worker store with the same keying and normalisation as
/// [`super::MongoWorkerRepository`]. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryWorkerRepository {
    workers: RwLock<HashMap<String, WorkerDocument>>,
}

impl InMemoryWorkerRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored workers
    pub async fn len(&self) -> usize {
        self.workers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.workers.read().await.is_empty()
    }
}

#[async_trait]
impl WorkerRepository for InMemoryWorkerRepository {
    async fn create_worker(&self, worker: Worker) -> Result<(), DatabaseError> {
        let document = WorkerDocument::from(worker);
        let mut workers = self.workers.write().await;
        if workers.contains_key(&document.email) {
            return Err(DatabaseError::ItemAlreadyExists(format!("Worker already exists: {}", document.email)));
        }
        workers.insert(document.email.clone(), document);
        Ok(())
    }

    async fn replace_worker(&self, worker: Worker) -> Result<bool, DatabaseError> {
        let document = WorkerDocument::from(worker);
        let mut workers = self.workers.write().await;
        match workers.get_mut(&document.email) {
            Some(stored) => {
                *stored = document;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_worker(&self, email: &str) -> Result<u64, DatabaseError> {
        Ok(self.workers.write().await.remove(email).map_or(0, |_| 1))
    }

    async fn get_worker_by_email(&self, email: &str) -> Result<Option<Worker>, DatabaseError> {
        Ok(self.workers.read().await.get(email).cloned().map(Worker::from))
    }

    async fn disconnect(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
