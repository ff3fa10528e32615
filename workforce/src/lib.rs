pub mod cli;
pub mod core;
pub mod error;
pub mod server;
pub mod service;
pub mod types;
pub mod utils;


// Re-export commonly used item
pub use error::{WorkforceError, WorkforceResult};
