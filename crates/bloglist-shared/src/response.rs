//! The error body shared by every failure response.

use serde::{Deserialize, Serialize};

/// `{ "error": "<message>" }` - the one shape every failure returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
