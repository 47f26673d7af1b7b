//! JWT token service implementation.

use bson::oid::ObjectId;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use bloglist_core::ports::{AuthError, TokenClaims, TokenService};

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expiration_hours: 24,
        }
    }
}

/// Internal JWT claims structure for serialization.
///
/// The subject fields deserialize leniently: a token that verifies but
/// carries no `id` is a valid token with no principal, and the caller
/// decides what that means.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>, // hex ObjectId of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    iat: i64, // issued at
    exp: i64, // expiration timestamp
}

/// JWT-based token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-in-production".to_string());

        // Warn if using default secret in production
        if secret == "change-me-in-production" {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        let config = JwtConfig {
            secret,
            expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(24),
        };
        Self::new(config)
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, user_id: ObjectId, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.expiration_hours);

        let claims = Claims {
            id: Some(user_id.to_hex()),
            username: Some(username.to_string()),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        let claims = token_data.claims;

        // A verified signature does not guarantee a usable subject: an `id`
        // claim that is absent or not a hex ObjectId resolves no principal.
        let user_id = claims
            .id
            .as_deref()
            .and_then(|id| ObjectId::parse_str(id).ok());

        Ok(TokenClaims {
            user_id,
            username: claims.username,
            exp: claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
        }
    }

    #[test]
    fn test_generate_token_success() {
        let service = JwtTokenService::new(test_config());
        let user_id = ObjectId::new();

        let result = service.generate_token(user_id, "mluukkai");

        assert!(result.is_ok());
        let token = result.unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_validate_token_success() {
        let service = JwtTokenService::new(test_config());
        let user_id = ObjectId::new();

        let token = service.generate_token(user_id, "mluukkai").unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id, Some(user_id));
        assert_eq!(claims.username.as_deref(), Some("mluukkai"));
    }

    #[test]
    fn test_validate_invalid_token() {
        let service = JwtTokenService::new(test_config());

        let result = service.validate_token("invalid-token");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_validate_wrong_secret_token() {
        let service1 = JwtTokenService::new(JwtConfig {
            secret: "secret-one".to_string(),
            expiration_hours: 1,
        });
        let service2 = JwtTokenService::new(JwtConfig {
            secret: "secret-two".to_string(),
            expiration_hours: 1,
        });

        let token = service1.generate_token(ObjectId::new(), "root").unwrap();

        let result = service2.validate_token(&token);
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_validate_expired_token() {
        // Expiry an hour in the past, well beyond the default leeway.
        let service = JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: -1,
        });

        let token = service.generate_token(ObjectId::new(), "root").unwrap();

        let result = service.validate_token(&token);
        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn test_token_without_subject_resolves_no_principal() {
        let service = JwtTokenService::new(test_config());

        let exp = Utc::now().timestamp() + 3600;
        let bare_claims = serde_json::json!({ "iat": exp - 3600, "exp": exp });
        let token = encode(
            &Header::default(),
            &bare_claims,
            &EncodingKey::from_secret("test-secret-key".as_bytes()),
        )
        .unwrap();

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.user_id, None);
        assert_eq!(claims.username, None);
    }
}
