//! Data Transfer Objects - request/response types for the API.
//!
//! Ids travel as hex strings on the wire; `ObjectId` never leaks into the
//! JSON shapes.

use serde::{Deserialize, Serialize};

/// Request to create a blog. Every field is optional at the wire level;
/// the server decides which are mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// Request to update a blog. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Owner of a blog as embedded in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Owner field of a blog response: a bare id right after writes, an
/// embedded profile in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlogOwner {
    Id(String),
    Profile(OwnerSummary),
}

/// A blog as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<BlogOwner>,
}

/// A blog as embedded in a user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
}

/// A user as returned by the API. The password hash is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub blogs: Vec<BlogSummary>,
}
