//! Authentication extractors.
//!
//! Two explicit stages mirror the request pipeline: [`BearerToken`] pulls
//! the raw token out of the Authorization header and never rejects;
//! [`Principal`] builds on it, verifying the token and loading the user
//! record. Handlers that take a `Principal` are exactly the ones for which
//! a caller identity is mandatory.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::StatusCode, http::header, web};
use futures::future::LocalBoxFuture;

use bloglist_core::domain::User;
use bloglist_core::ports::{AuthError, TokenService, UserRepository};
use bloglist_shared::ErrorResponse;

use crate::state::AppState;

/// Raw bearer token from the Authorization header, if any.
///
/// Extraction never fails: a missing header, a non-Bearer scheme, or an
/// unreadable value all yield `None`.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<String>);

impl FromRequest for BearerToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);
        ready(Ok(BearerToken(token)))
    }
}

/// The authenticated caller, resolved to a stored user record.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user: User,
}

/// Rejection raised when a principal is mandatory but cannot be
/// established.
#[derive(Debug)]
pub enum AuthRejection {
    Auth(AuthError),
    Internal(String),
}

impl std::fmt::Display for AuthRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthRejection::Auth(err) => write!(f, "{}", err),
            AuthRejection::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl actix_web::ResponseError for AuthRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            // Absent or undecodable tokens are the client's formatting
            // problem; expiry and an unresolvable subject are authorization
            // failures.
            AuthRejection::Auth(AuthError::MissingToken) => StatusCode::BAD_REQUEST,
            AuthRejection::Auth(AuthError::InvalidToken(_)) => StatusCode::BAD_REQUEST,
            AuthRejection::Auth(AuthError::TokenExpired) => StatusCode::UNAUTHORIZED,
            AuthRejection::Auth(AuthError::PrincipalNotFound) => StatusCode::UNAUTHORIZED,
            AuthRejection::Auth(AuthError::HashingError(_)) | AuthRejection::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Authentication failure: {}", self);
            return actix_web::HttpResponse::build(status)
                .json(ErrorResponse::new("internal server error"));
        }
        actix_web::HttpResponse::build(status).json(ErrorResponse::new(self.to_string()))
    }
}

impl FromRequest for Principal {
    type Error = AuthRejection;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        // First stage: the raw token. Infallible, so the error arm is never
        // taken.
        let token = BearerToken::from_request(req, payload)
            .into_inner()
            .map(|BearerToken(token)| token)
            .unwrap_or(None);

        let token_service = req
            .app_data::<web::Data<Arc<dyn TokenService>>>()
            .map(|data| data.get_ref().clone());
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let token = token.ok_or(AuthRejection::Auth(AuthError::MissingToken))?;

            let (Some(token_service), Some(state)) = (token_service, state) else {
                return Err(AuthRejection::Internal(
                    "TokenService or AppState not found in app data".to_string(),
                ));
            };

            let claims = token_service
                .validate_token(&token)
                .map_err(AuthRejection::Auth)?;

            // Verified token, but no subject that maps to a user id.
            let Some(user_id) = claims.user_id else {
                return Err(AuthRejection::Auth(AuthError::PrincipalNotFound));
            };

            let user = state
                .users
                .find_by_id(user_id)
                .await
                .map_err(|e| AuthRejection::Internal(e.to_string()))?
                .ok_or(AuthRejection::Auth(AuthError::PrincipalNotFound))?;

            Ok(Principal { user })
        })
    }
}
