//! Application configuration loaded from environment variables.

use std::env;

use bloglist_infra::db::MongoConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo: Option<MongoConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mongo = env::var("MONGODB_URI").ok().map(|uri| MongoConfig {
            uri,
            database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "bloglist".to_string()),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3003),
            mongo,
        }
    }
}
