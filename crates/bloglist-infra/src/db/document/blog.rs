//! Blog document for the `blogs` collection.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use bloglist_core::domain::Blog;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    /// Absent on records stored before ownership existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ObjectId>,
}

/// Conversion from stored document to domain Blog.
impl From<BlogDocument> for Blog {
    fn from(doc: BlogDocument) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            author: doc.author,
            url: doc.url,
            likes: doc.likes,
            user: doc.user,
        }
    }
}

/// Conversion from domain Blog to stored document.
impl From<Blog> for BlogDocument {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: blog.user,
        }
    }
}
