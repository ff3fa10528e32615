use clap::Parser as _;
use dotenvy::dotenv;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use workforce::cli::RunCmd;
use workforce::core::config::Config;
use workforce::server::setup_server;
use workforce::utils::logging::init_logging;
use workforce::utils::signal_handler::wait_for_shutdown;
use workforce::WorkforceResult;

/// Start the server
#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() -> ExitCode {
    dotenv().ok();
    if let Err(e) = init_logging() {
        // No subscriber yet, stderr is the only place left to report to.
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let run_cmd = RunCmd::parse();
    info!("Starting workforce service");
    debug!("Executing run command with args: {:?}", run_cmd);

    match run_workforce(&run_cmd).await {
        Ok(()) => {
            info!("Workforce service stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(
                error = %e,
                error_chain = ?e,
                "Workforce service failed"
            );
            ExitCode::FAILURE
        }
    }
}

async fn run_workforce(run_cmd: &RunCmd) -> WorkforceResult<()> {
    let config = Arc::new(Config::from_run_cmd(run_cmd).await?);
    debug!("Configuration initialized");

    let (_, server_handle) = setup_server(config.clone()).await?;

    let signal = wait_for_shutdown().await;
    if let Err(e) = &signal {
        warn!(error = %e, "Signal handling unavailable, shutting down");
    }

    let server_result = server_handle.shutdown().await;

    // The database is released even if the server stopped with an error
    if let Err(e) = config.database().disconnect().await {
        warn!(error = %e, "Failed to disconnect from the database");
    }
    server_result
}
