//! User handlers.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpResponse, web};
use bson::oid::ObjectId;

use bloglist_core::domain::{Blog, DUPLICATE_USERNAME_ERROR, User};
use bloglist_core::ports::{BlogRepository, PasswordService, UserRepository};
use bloglist_shared::dto::{BlogSummary, NewUserRequest, UserResponse};

use crate::middleware::error::{ApiError, ApiResult};
use crate::state::AppState;

fn user_response(user: User, blogs: &HashMap<ObjectId, Blog>) -> UserResponse {
    let summaries = user
        .blogs
        .iter()
        .filter_map(|id| blogs.get(id))
        .map(|blog| BlogSummary {
            id: blog.id.to_hex(),
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
        })
        .collect();

    UserResponse {
        id: user.id.to_hex(),
        username: user.username,
        name: user.name,
        blogs: summaries,
    }
}

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let users = state.users.find_all().await?;

    let mut blog_ids: Vec<ObjectId> = users
        .iter()
        .flat_map(|user| user.blogs.iter().copied())
        .collect();
    blog_ids.sort_unstable();
    blog_ids.dedup();

    let blogs: HashMap<ObjectId, Blog> = state
        .blogs
        .find_by_ids(&blog_ids)
        .await?
        .into_iter()
        .map(|blog| (blog.id, blog))
        .collect();

    let body: Vec<UserResponse> = users
        .into_iter()
        .map(|user| user_response(user, &blogs))
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/users
pub async fn create(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<NewUserRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();

    let username = User::validate_username(req.username)?;
    let password = User::validate_password(req.password)?;

    // Pre-insert check; the unique index still catches races.
    if state.users.find_by_username(&username).await?.is_some() {
        return Err(ApiError::Validation(DUPLICATE_USERNAME_ERROR.to_string()));
    }

    let password_hash = password_service.hash(&password)?;

    let user = User::new(username, req.name, password_hash);
    let saved = state.users.insert(user).await?;

    Ok(HttpResponse::Created().json(user_response(saved, &HashMap::new())))
}
