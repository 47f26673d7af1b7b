//! Authentication ports.

use bson::oid::ObjectId;

/// Claims recovered from a verified token.
///
/// The subject fields are optional on purpose: a token can carry a valid
/// signature yet no usable subject, and that case is decided by the caller,
/// not by signature verification.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Option<ObjectId>,
    pub username: Option<String>,
    pub exp: i64,
}

/// Token service trait for JWT operations.
pub trait TokenService: Send + Sync {
    /// Sign a token identifying a user.
    fn generate_token(&self, user_id: ObjectId, username: &str) -> Result<String, AuthError>;

    /// Verify a token and decode its claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors. The lowercase messages are client-visible;
/// `HashingError` stays server-side.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token missing")]
    MissingToken,

    #[error("token expired")]
    TokenExpired,

    #[error("{0}")]
    InvalidToken(String),

    #[error("token invalid")]
    PrincipalNotFound,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
