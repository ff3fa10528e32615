use clap::Args;

/// Parameters used to config MongoDB.
#[derive(Debug, Clone, Args)]
pub struct MongoDBCliArgs {
    /// The connection string to the MongoDB server.
    #[arg(env = "MONGO_ADDRESS", long, default_value = "mongodb://localhost:27017")]
    pub mongodb_connection_url: String,

    /// The name of the database holding the workers collection.
    #[arg(env = "WORKFORCE_DATABASE_NAME", long, default_value = "team")]
    pub mongodb_database_name: String,

    /// How many times to try reaching MongoDB at startup before giving up.
    #[arg(env = "WORKFORCE_MONGODB_CONNECT_RETRIES", long, default_value_t = 3)]
    pub mongodb_connect_retries: u32,

    /// Fixed delay between two startup connection attempts, in milliseconds.
    #[arg(env = "WORKFORCE_MONGODB_CONNECT_RETRY_DELAY_MS", long, default_value_t = 1000)]
    pub mongodb_connect_retry_delay_ms: u64,
}
