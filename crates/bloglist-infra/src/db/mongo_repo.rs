//! MongoDB repository implementations.

use async_trait::async_trait;
use bson::{Document, doc, oid::ObjectId};
use mongodb::Cursor;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ReturnDocument;
use serde::de::DeserializeOwned;

use bloglist_core::domain::{Blog, BlogUpdate, DUPLICATE_USERNAME_ERROR, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BlogRepository, UserRepository};

use super::document::{BlogDocument, UserDocument};
use super::mongo::MongoDatabase;

/// Blog repository backed by the `blogs` collection.
pub struct MongoBlogRepository {
    db: MongoDatabase,
}

impl MongoBlogRepository {
    pub fn new(db: MongoDatabase) -> Self {
        Self { db }
    }
}

/// User repository backed by the `users` collection.
pub struct MongoUserRepository {
    db: MongoDatabase,
}

impl MongoUserRepository {
    pub fn new(db: MongoDatabase) -> Self {
        Self { db }
    }
}

fn query_err(e: mongodb::error::Error) -> RepoError {
    RepoError::Query(e.to_string())
}

/// The server reports unique-index violations as write error 11000.
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => write_error.code == 11000,
        _ => false,
    }
}

/// Drain a cursor into domain values.
async fn collect_all<D, T>(mut cursor: Cursor<D>) -> Result<Vec<T>, RepoError>
where
    D: DeserializeOwned + Into<T>,
{
    let mut items = Vec::new();
    while cursor.advance().await.map_err(query_err)? {
        items.push(cursor.deserialize_current().map_err(query_err)?.into());
    }
    Ok(items)
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        let cursor = self.db.blogs().find(doc! {}).await.map_err(query_err)?;
        collect_all(cursor).await
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Blog>, RepoError> {
        let found = self
            .db
            .blogs()
            .find_one(doc! { "_id": id })
            .await
            .map_err(query_err)?;
        Ok(found.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Blog>, RepoError> {
        let cursor = self
            .db
            .blogs()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(query_err)?;
        collect_all(cursor).await
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let document = BlogDocument::from(blog);
        self.db
            .blogs()
            .insert_one(&document)
            .await
            .map_err(query_err)?;
        Ok(document.into())
    }

    async fn update(&self, id: ObjectId, changes: BlogUpdate) -> Result<Option<Blog>, RepoError> {
        let mut set = Document::new();
        if let Some(title) = changes.title {
            set.insert("title", title);
        }
        if let Some(author) = changes.author {
            set.insert("author", author);
        }
        if let Some(url) = changes.url {
            set.insert("url", url);
        }
        if let Some(likes) = changes.likes {
            set.insert("likes", likes);
        }

        // The server rejects an empty $set; an update with no fields is a
        // plain read.
        if set.is_empty() {
            return self.find_by_id(id).await;
        }

        let updated = self
            .db
            .blogs()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(query_err)?;
        Ok(updated.map(Into::into))
    }

    async fn delete(&self, id: ObjectId) -> Result<(), RepoError> {
        self.db
            .blogs()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(query_err)?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let cursor = self.db.users().find(doc! {}).await.map_err(query_err)?;
        collect_all(cursor).await
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepoError> {
        let found = self
            .db
            .users()
            .find_one(doc! { "_id": id })
            .await
            .map_err(query_err)?;
        Ok(found.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let found = self
            .db
            .users()
            .find_one(doc! { "username": username })
            .await
            .map_err(query_err)?;
        Ok(found.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, RepoError> {
        let cursor = self
            .db
            .users()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(query_err)?;
        collect_all(cursor).await
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let document = UserDocument::from(user);
        self.db.users().insert_one(&document).await.map_err(|e| {
            if is_duplicate_key(&e) {
                RepoError::Constraint(DUPLICATE_USERNAME_ERROR.to_string())
            } else {
                query_err(e)
            }
        })?;
        Ok(document.into())
    }

    async fn update(&self, user: User) -> Result<(), RepoError> {
        let document = UserDocument::from(user);
        self.db
            .users()
            .replace_one(doc! { "_id": document.id }, &document)
            .await
            .map_err(query_err)?;
        Ok(())
    }
}
