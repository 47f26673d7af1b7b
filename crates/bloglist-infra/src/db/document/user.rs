//! User document for the `users` collection.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use bloglist_core::domain::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub password_hash: String,
    #[serde(default)]
    pub blogs: Vec<ObjectId>,
}

/// Conversion from stored document to domain User.
impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id,
            username: doc.username,
            name: doc.name,
            password_hash: doc.password_hash,
            blogs: doc.blogs,
        }
    }
}

/// Conversion from domain User to stored document.
impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            password_hash: user.password_hash,
            blogs: user.blogs,
        }
    }
}
