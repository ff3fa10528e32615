pub mod database;

pub use database::repository::worker::WorkerRepository;
pub use database::DatabaseError;
