use std::sync::Arc;

use tracing::info;

use crate::cli::RunCmd;
use crate::core::client::database::repository::worker::MongoWorkerRepository;
use crate::core::client::database::MongoClient;
use crate::core::client::WorkerRepository;
use crate::types::params::{DatabaseArgs, ServerParams};
use crate::WorkforceResult;

/// The app config, shared by every request handler through axum state.
///
/// The repository is injected rather than held in a global, so tests can
/// swap in an in-memory store or a mock.
pub struct Config {
    /// Where the HTTP listener binds
    server_params: ServerParams,
    /// The worker store
    database: Arc<dyn WorkerRepository>,
}

impl Config {
    pub fn new(server_params: ServerParams, database: Arc<dyn WorkerRepository>) -> Self {
        Self { server_params, database }
    }

    /// Build the config from the command line, connecting to MongoDB.
    ///
    /// # Errors
    /// Fails on invalid arguments, or when MongoDB stays unreachable after the
    /// configured number of attempts.
    pub async fn from_run_cmd(run_cmd: &RunCmd) -> WorkforceResult<Self> {
        let database_args = DatabaseArgs::try_from(run_cmd.mongodb_args.clone())?;
        let server_params = ServerParams::from(run_cmd.server_args.clone());

        let client = MongoClient::connect(&database_args).await?;
        info!(database = %database_args.database_name, "Worker repository ready");
        let database = Arc::new(MongoWorkerRepository::new(Arc::new(client)));

        Ok(Self::new(server_params, database))
    }

    pub fn server_config(&self) -> &ServerParams {
        &self.server_params
    }

    pub fn database(&self) -> &Arc<dyn WorkerRepository> {
        &self.database
    }
}
