mod memory;
mod mongo;
mod r#trait;

pub use memory::InMemoryWorkerRepository;
pub use mongo::{MongoWorkerRepository, WorkerDocument};
pub use r#trait::WorkerRepository;

#[cfg(test)]
pub use r#trait::MockWorkerRepository;
