use clap::Args;

/// Parameters used to config the server.
#[derive(Debug, Clone, Args)]
#[group()]
pub struct ServerCliArgs {
    /// The host to listen on.
    #[arg(env = "WORKFORCE_HOST", long, default_value = "0.0.0.0")]
    pub host: String,

    /// The port to listen on.
    #[arg(env = "WORKFORCE_PORT", long, default_value = "80")]
    pub port: u16,
}
