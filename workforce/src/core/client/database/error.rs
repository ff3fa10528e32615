use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Mongo error: {0}")]
    MongoError(#[from] mongodb::error::Error),

    #[error("Failed to connect to MongoDB after {attempts} attempt(s): {source}")]
    ConnectionFailed {
        attempts: u32,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Item already exists: {0}")]
    ItemAlreadyExists(String),
}
