use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::{Blog, BlogUpdate, User};
use crate::error::RepoError;

/// Blog repository.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// All blogs, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Blog>, RepoError>;

    /// Batch lookup by id, for embedding references. Order is unspecified.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Blog>, RepoError>;

    /// Insert a new blog and return the stored record.
    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError>;

    /// Apply the present fields of `changes` to a blog and return the
    /// updated record, or `None` when no blog has this id.
    async fn update(&self, id: ObjectId, changes: BlogUpdate) -> Result<Option<Blog>, RepoError>;

    /// Delete a blog. Deleting an id with no record is a no-op.
    async fn delete(&self, id: ObjectId) -> Result<(), RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<User>, RepoError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Batch lookup by id, for embedding references. Order is unspecified.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, RepoError>;

    /// Insert a new user and return the stored record.
    async fn insert(&self, user: User) -> Result<User, RepoError>;

    /// Replace the stored record carrying `user.id` with `user`.
    async fn update(&self, user: User) -> Result<(), RepoError>;
}
