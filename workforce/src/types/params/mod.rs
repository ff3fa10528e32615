pub mod database;
pub mod service;

pub use database::DatabaseArgs;
pub use service::ServerParams;
