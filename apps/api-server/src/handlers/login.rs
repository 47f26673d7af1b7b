//! Login handler.

use std::sync::Arc;

use actix_web::{HttpResponse, web};

use bloglist_core::ports::{PasswordService, TokenService, UserRepository};
use bloglist_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();

    let user = state.users.find_by_username(&req.username).await?;

    // Verify against the stored hash; an unknown username fails the same
    // way as a wrong password.
    let password_correct = match &user {
        Some(user) => password_service.verify(&req.password, &user.password_hash)?,
        None => false,
    };

    let Some(user) = user.filter(|_| password_correct) else {
        return Err(ApiError::InvalidCredentials);
    };

    let token = token_service.generate_token(user.id, &user.username)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
