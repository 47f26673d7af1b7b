use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Blog entity - a saved link with a like counter, owned by at most one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: ObjectId,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    /// Owning user. Legacy records may have none.
    pub user: Option<ObjectId>,
}

/// Field-wise update for a blog. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct BlogUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl Blog {
    /// Create a new blog owned by the given user.
    ///
    /// Title and url are mandatory; likes defaults to zero and the author
    /// field to an empty string.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        url: Option<String>,
        likes: Option<i64>,
        user: ObjectId,
    ) -> Result<Self, DomainError> {
        let title = required(title, "title")?;
        let url = required(url, "url")?;
        Ok(Self {
            id: ObjectId::new(),
            title,
            author: author.unwrap_or_default(),
            url,
            likes: likes.unwrap_or(0),
            user: Some(user),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::Validation(format!("`{field}` is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_likes_to_zero() {
        let blog = Blog::new(
            Some("React patterns".to_string()),
            Some("Michael Chan".to_string()),
            Some("https://reactpatterns.com/".to_string()),
            None,
            ObjectId::new(),
        )
        .unwrap();
        assert_eq!(blog.likes, 0);
    }

    #[test]
    fn test_rejects_missing_title() {
        let err = Blog::new(
            None,
            Some("Michael Chan".to_string()),
            Some("https://reactpatterns.com/".to_string()),
            Some(7),
            ObjectId::new(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "`title` is required");
    }

    #[test]
    fn test_rejects_empty_url() {
        let err = Blog::new(
            Some("React patterns".to_string()),
            None,
            Some(String::new()),
            None,
            ObjectId::new(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "`url` is required");
    }
}
