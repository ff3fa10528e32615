pub mod constant;
pub mod error;
pub mod mongo_client;
pub mod repository;

pub use error::DatabaseError;
pub use mongo_client::MongoClient;
