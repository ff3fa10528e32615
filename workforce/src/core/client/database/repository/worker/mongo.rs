use async_trait::async_trait;
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::r#trait::WorkerRepository;
use crate::core::client::database::constant::WORKERS_COLLECTION;
use crate::core::client::database::error::DatabaseError;
use crate::core::client::database::mongo_client::MongoClient;
use crate::types::worker::{null_as_default, Worker};

/// Stored shape of a [`Worker`]: the email is the document `_id`.
///
/// Empty optional strings are dropped on the way in, so an employee posted
/// with `"contractEnd": ""` is stored (and read back) without the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerDocument {
    #[serde(rename = "_id")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "isContractor", default, deserialize_with = "null_as_default")]
    pub is_contractor: bool,
    #[serde(rename = "contractEnd", default, skip_serializing_if = "Option::is_none")]
    pub contract_end: Option<String>,
    #[serde(rename = "jobTitle", default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl From<Worker> for WorkerDocument {
    fn from(worker: Worker) -> Self {
        Self {
            email: worker.email,
            name: worker.name,
            is_contractor: worker.is_contractor,
            contract_end: worker.contract_end.filter(|value| !value.is_empty()),
            job_title: worker.job_title.filter(|value| !value.is_empty()),
            tags: worker.tags,
        }
    }
}

impl From<WorkerDocument> for Worker {
    fn from(document: WorkerDocument) -> Self {
        Self {
            email: document.email,
            name: document.name,
            is_contractor: document.is_contractor,
            contract_end: document.contract_end,
            job_title: document.job_title,
            tags: document.tags,
        }
    }
}

pub struct MongoWorkerRepository {
    client: Arc<MongoClient>,
}

impl MongoWorkerRepository {
    pub fn new(client: Arc<MongoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WorkerRepository for MongoWorkerRepository {
    async fn create_worker(&self, worker: Worker) -> Result<(), DatabaseError> {
        let document = WorkerDocument::from(worker);
        let email = document.email.clone();
        self.client.insert_one(WORKERS_COLLECTION, document).await?;
        debug!(email = %email, "Worker created");
        Ok(())
    }

    async fn replace_worker(&self, worker: Worker) -> Result<bool, DatabaseError> {
        let document = WorkerDocument::from(worker);
        let filter = doc! { "_id": document.email.as_str() };
        let result = self.client.replace_one(WORKERS_COLLECTION, filter, document).await?;
        debug!(matched = result.matched_count, modified = result.modified_count, "Worker replaced");
        Ok(result.matched_count > 0)
    }

    async fn delete_worker(&self, email: &str) -> Result<u64, DatabaseError> {
        self.client.delete_one::<WorkerDocument>(WORKERS_COLLECTION, doc! { "_id": email }).await
    }

    async fn get_worker_by_email(&self, email: &str) -> Result<Option<Worker>, DatabaseError> {
        let document: Option<WorkerDocument> = self.client.find_one(WORKERS_COLLECTION, doc! { "_id": email }).await?;
        Ok(document.map(Worker::from))
    }

    async fn disconnect(&self) -> Result<(), DatabaseError> {
        self.client.shutdown().await;
        Ok(())
    }
}
