//! # Bloglist Infrastructure
//!
//! Concrete implementations of the ports defined in `bloglist-core`:
//! document-store repositories, their in-memory fallback, and the JWT and
//! password services.
//!
//! ## Feature Flags
//!
//! - `mongo` (default) - MongoDB persistence; without it only the in-memory
//!   repositories are available.

pub mod auth;
pub mod db;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use db::{InMemoryBlogRepository, InMemoryUserRepository, MongoConfig};

#[cfg(feature = "mongo")]
pub use db::{MongoBlogRepository, MongoDatabase, MongoUserRepository};
