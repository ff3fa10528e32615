use mongodb::bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::client::database::constant::DUPLICATE_KEY_ERROR_CODE;
use crate::core::client::database::error::DatabaseError;
use crate::types::params::DatabaseArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Generic MongoDB client with no business logic knowledge
///
/// This client provides plain CRUD operations on named collections. It handles:
/// - Connection management, including the bounded retry done at startup
/// - Generic find/insert/replace/delete
/// - Shutdown of the driver's connection pool
///
/// The driver client is an `Arc` internally and safe to share between
/// concurrent requests without extra locking.
pub struct MongoClient {
    client: Client,
    database: Database,
}

impl MongoClient {
    /// Connect to MongoDB, retrying with a fixed delay.
    ///
    /// Each attempt parses the URI, builds the client and pings the
    /// deployment, so an unreachable server counts as a failed attempt.
    ///
    /// # Errors
    /// [`DatabaseError::ConnectionFailed`] once `args.connect_retries` attempts failed.
    pub async fn connect(args: &DatabaseArgs) -> Result<Self, DatabaseError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match Self::try_connect(&args.connection_uri, &args.database_name).await {
                Ok(client) => {
                    info!(attempt, database = %args.database_name, "Connected to MongoDB");
                    return Ok(client);
                }
                Err(e) if attempt < args.connect_retries => {
                    warn!(
                        attempt,
                        max_attempts = args.connect_retries,
                        error = %e,
                        "Failed to connect to MongoDB, retrying"
                    );
                    tokio::time::sleep(args.connect_retry_delay).await;
                }
                Err(e) => return Err(DatabaseError::ConnectionFailed { attempts: attempt, source: e }),
            }
        }
    }

    async fn try_connect(connection_uri: &str, database_name: &str) -> Result<Self, mongodb::error::Error> {
        let options = ClientOptions::parse(connection_uri).await?;
        let client = Client::with_options(options)?;
        client.database("admin").run_command(doc! { "ping": 1 }, None).await?;
        let database = client.database(database_name);
        Ok(Self { client, database })
    }

    /// Get a typed collection
    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Find a single document
    pub async fn find_one<T>(&self, collection: &str, filter: Document) -> Result<Option<T>, DatabaseError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        Ok(self.collection::<T>(collection).find_one(filter, None).await?)
    }

    /// Insert a single document.
    /// A unique index violation is reported as [`DatabaseError::ItemAlreadyExists`].
    pub async fn insert_one<T>(&self, collection: &str, doc: T) -> Result<(), DatabaseError>
    where
        T: Serialize + Send + Sync,
    {
        match self.collection::<T>(collection).insert_one(doc, None).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key_error(&e) => Err(DatabaseError::ItemAlreadyExists(e.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace a whole document without upserting
    pub async fn replace_one<T>(
        &self,
        collection: &str,
        filter: Document,
        replacement: T,
    ) -> Result<UpdateResult, DatabaseError>
    where
        T: Serialize + Send + Sync,
    {
        let result = self.collection::<T>(collection).replace_one(filter, replacement, None).await?;
        Ok(UpdateResult { matched_count: result.matched_count, modified_count: result.modified_count })
    }

    /// Delete a single document
    pub async fn delete_one<T>(&self, collection: &str, filter: Document) -> Result<u64, DatabaseError>
    where
        T: Send + Sync,
    {
        let result = self.collection::<T>(collection).delete_one(filter, None).await?;
        Ok(result.deleted_count)
    }

    /// Close the connection pool. In-flight operations are awaited by the driver.
    pub async fn shutdown(&self) {
        debug!("Shutting down MongoDB client");
        self.client.clone().shutdown().await;
    }
}

fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_ERROR_CODE
    )
}
