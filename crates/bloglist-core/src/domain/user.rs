use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Error message for the unique-username constraint, shared by the
/// pre-insert check and the duplicate-key mapping in the repositories.
pub const DUPLICATE_USERNAME_ERROR: &str = "expected `username` to be unique";

const USERNAME_MIN_LENGTH: usize = 3;
const PASSWORD_MIN_LENGTH: usize = 3;

/// User entity - an account that owns blogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: ObjectId,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
    /// Ids of the blogs this user has created.
    pub blogs: Vec<ObjectId>,
}

impl User {
    /// Create a new user with a generated id and no blogs.
    pub fn new(username: String, name: Option<String>, password_hash: String) -> Self {
        Self {
            id: ObjectId::new(),
            username,
            name,
            password_hash,
            blogs: Vec::new(),
        }
    }

    /// Check the username constraints (present, at least 3 characters) and
    /// hand the value back for use.
    pub fn validate_username(username: Option<String>) -> Result<String, DomainError> {
        match username {
            None => Err(DomainError::Validation("`username` is required".to_string())),
            Some(u) if u.is_empty() => {
                Err(DomainError::Validation("`username` is required".to_string()))
            }
            Some(u) if u.chars().count() < USERNAME_MIN_LENGTH => {
                Err(DomainError::Validation(format!(
                    "`username` (`{u}`) is shorter than the minimum allowed length ({USERNAME_MIN_LENGTH})"
                )))
            }
            Some(u) => Ok(u),
        }
    }

    /// Check a plaintext password before it is hashed and hand the value
    /// back for use.
    pub fn validate_password(password: Option<String>) -> Result<String, DomainError> {
        match password {
            Some(p) if p.chars().count() >= PASSWORD_MIN_LENGTH => Ok(p),
            _ => Err(DomainError::Validation("password is invalid".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_username() {
        let username = User::validate_username(Some("mluukkai".to_string())).unwrap();
        assert_eq!(username, "mluukkai");
    }

    #[test]
    fn test_rejects_missing_username() {
        let err = User::validate_username(None).unwrap_err();
        assert_eq!(err.to_string(), "`username` is required");
    }

    #[test]
    fn test_rejects_short_username() {
        let err = User::validate_username(Some("ad".to_string())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`username` (`ad`) is shorter than the minimum allowed length (3)"
        );
    }

    #[test]
    fn test_rejects_short_password() {
        let err = User::validate_password(Some("pw".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "password is invalid");
        assert!(User::validate_password(None).is_err());
        assert!(User::validate_password(Some("sekret".to_string())).is_ok());
    }
}
