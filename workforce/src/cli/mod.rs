use clap::Parser;

pub mod database;
pub mod server;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "workforce",
    version,
    about = "Workforce - employee and contractor records over HTTP",
    long_about = "Workforce serves create/read/update/delete operations on worker records \
    (employees and contractors) stored in MongoDB.\n\n\
    Every flag can also be set through its environment variable or a `.env` file."
)]
pub struct RunCmd {
    #[clap(flatten)]
    pub mongodb_args: database::mongodb::MongoDBCliArgs,

    #[clap(flatten)]
    pub server_args: server::ServerCliArgs,
}
