use crate::cli::server::ServerCliArgs;

#[derive(Debug, Clone)]
pub struct ServerParams {
    pub host: String,
    pub port: u16,
}

impl From<ServerCliArgs> for ServerParams {
    fn from(args: ServerCliArgs) -> Self {
        Self { host: args.host, port: args.port }
    }
}
