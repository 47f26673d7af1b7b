//! MongoDB connection management.

use bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use bloglist_core::error::RepoError;

use super::MongoConfig;
use super::document::{BlogDocument, UserDocument};

/// Shared handle to the database with typed collection accessors.
#[derive(Clone)]
pub struct MongoDatabase {
    db: mongodb::Database,
}

impl MongoDatabase {
    /// Connect to the configured database and create the indexes the
    /// application relies on.
    pub async fn connect(config: &MongoConfig) -> Result<Self, RepoError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        let db = client.database(&config.database);

        let database = Self { db };
        database.ensure_indexes().await?;
        Ok(database)
    }

    /// Unique index backing the username constraint.
    async fn ensure_indexes(&self) -> Result<(), RepoError> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.users()
            .create_index(index)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        Ok(())
    }

    pub fn blogs(&self) -> Collection<BlogDocument> {
        self.db.collection("blogs")
    }

    pub fn users(&self) -> Collection<UserDocument> {
        self.db.collection("users")
    }
}
