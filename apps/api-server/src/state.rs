//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::{BlogRepository, UserRepository};
use bloglist_infra::db::{InMemoryBlogRepository, InMemoryUserRepository, MongoConfig};

#[cfg(feature = "mongo")]
use bloglist_infra::db::{MongoBlogRepository, MongoDatabase, MongoUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(mongo_config: Option<&MongoConfig>) -> Self {
        #[cfg(feature = "mongo")]
        if let Some(config) = mongo_config {
            match MongoDatabase::connect(config).await {
                Ok(db) => {
                    tracing::info!(database = %config.database, "Connected to MongoDB");
                    return Self {
                        blogs: Arc::new(MongoBlogRepository::new(db.clone())),
                        users: Arc::new(MongoUserRepository::new(db)),
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to MongoDB: {}. Using in-memory fallback.",
                        e
                    );
                    return Self::in_memory();
                }
            }
        }

        #[cfg(not(feature = "mongo"))]
        if mongo_config.is_some() {
            tracing::info!("Built without the mongo feature - using in-memory repositories");
            return Self::in_memory();
        }

        tracing::warn!("MONGODB_URI not set. Running with in-memory repositories.");
        Self::in_memory()
    }

    /// State over the in-memory repositories; also the backend the HTTP
    /// tests run against.
    pub fn in_memory() -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }
}
