//! In-memory repository implementations - used as fallback when MongoDB is
//! unavailable and as the backend for HTTP-level tests.

use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;

use bloglist_core::domain::{Blog, BlogUpdate, DUPLICATE_USERNAME_ERROR, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BlogRepository, UserRepository};

/// Blog repository over a plain `Vec` with async RwLock, insertion-ordered.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|blog| blog.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|blog| ids.contains(&blog.id))
            .cloned()
            .collect())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        store.push(blog.clone());
        Ok(blog)
    }

    async fn update(&self, id: ObjectId, changes: BlogUpdate) -> Result<Option<Blog>, RepoError> {
        let mut store = self.store.write().await;
        let Some(blog) = store.iter_mut().find(|blog| blog.id == id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            blog.title = title;
        }
        if let Some(author) = changes.author {
            blog.author = author;
        }
        if let Some(url) = changes.url {
            blog.url = url;
        }
        if let Some(likes) = changes.likes {
            blog.likes = likes;
        }
        Ok(Some(blog.clone()))
    }

    async fn delete(&self, id: ObjectId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.retain(|blog| blog.id != id);
        Ok(())
    }
}

/// User repository over a plain `Vec` with async RwLock.
///
/// Mirrors the store's unique-username constraint so validation behaves the
/// same against either backend.
pub struct InMemoryUserRepository {
    store: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|user| user.username == username).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|stored| stored.username == user.username) {
            return Err(RepoError::Constraint(DUPLICATE_USERNAME_ERROR.to_string()));
        }
        store.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if let Some(stored) = store.iter_mut().find(|stored| stored.id == user.id) {
            *stored = user;
        }
        Ok(())
    }
}
