//! Persistence adapters: MongoDB repositories and the in-memory fallback.

mod memory;

#[cfg(feature = "mongo")]
pub mod document;

#[cfg(feature = "mongo")]
mod mongo;
#[cfg(feature = "mongo")]
mod mongo_repo;

pub use memory::{InMemoryBlogRepository, InMemoryUserRepository};

#[cfg(feature = "mongo")]
pub use mongo::MongoDatabase;
#[cfg(feature = "mongo")]
pub use mongo_repo::{MongoBlogRepository, MongoUserRepository};

/// MongoDB connection settings. Not feature-gated so configuration can be
/// parsed whether or not the driver is compiled in.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}
