use std::time::Duration;

use crate::cli::database::mongodb::MongoDBCliArgs;
use crate::error::WorkforceError;

/// Validated MongoDB parameters
#[derive(Debug, Clone)]
pub struct DatabaseArgs {
    pub connection_uri: String,
    pub database_name: String,
    /// Total connection attempts made at startup, at least one.
    pub connect_retries: u32,
    pub connect_retry_delay: Duration,
}

impl TryFrom<MongoDBCliArgs> for DatabaseArgs {
    type Error = WorkforceError;

    fn try_from(args: MongoDBCliArgs) -> Result<Self, Self::Error> {
        if args.mongodb_connection_url.trim().is_empty() {
            return Err(WorkforceError::ConfigError("MongoDB connection URL must not be empty".to_string()));
        }
        if args.mongodb_database_name.trim().is_empty() {
            return Err(WorkforceError::ConfigError("MongoDB database name must not be empty".to_string()));
        }
        if args.mongodb_connect_retries == 0 {
            return Err(WorkforceError::ConfigError("MongoDB connect retries must be at least 1".to_string()));
        }

        Ok(Self {
            connection_uri: args.mongodb_connection_url,
            database_name: args.mongodb_database_name,
            connect_retries: args.mongodb_connect_retries,
            connect_retry_delay: Duration::from_millis(args.mongodb_connect_retry_delay_ms),
        })
    }
}
