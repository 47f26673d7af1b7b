//! Blog handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use bson::oid::ObjectId;

use bloglist_core::domain::{Blog, BlogUpdate, User};
use bloglist_core::ports::{BlogRepository, UserRepository};
use bloglist_shared::dto::{
    BlogOwner, BlogResponse, NewBlogRequest, OwnerSummary, UpdateBlogRequest,
};

use crate::middleware::auth::Principal;
use crate::middleware::error::{ApiError, ApiResult};
use crate::state::AppState;

pub(super) fn parse_object_id(raw: &str) -> ApiResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::MalformedId)
}

/// Blog response with the owner as a bare id, the shape writes return.
fn blog_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id.to_hex(),
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user: blog.user.map(|id| BlogOwner::Id(id.to_hex())),
    }
}

/// Blog response with the owner embedded, the shape listings return. An
/// owner id with no user record falls back to the bare id.
fn blog_response_with_owner(blog: Blog, owners: &HashMap<ObjectId, User>) -> BlogResponse {
    let user = blog.user.map(|id| match owners.get(&id) {
        Some(owner) => BlogOwner::Profile(OwnerSummary {
            id: owner.id.to_hex(),
            username: owner.username.clone(),
            name: owner.name.clone(),
        }),
        None => BlogOwner::Id(id.to_hex()),
    });
    BlogResponse {
        id: blog.id.to_hex(),
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user,
    }
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;

    let mut owner_ids: Vec<ObjectId> = blogs.iter().filter_map(|blog| blog.user).collect();
    owner_ids.sort_unstable();
    owner_ids.dedup();

    let owners: HashMap<ObjectId, User> = state
        .users
        .find_by_ids(&owner_ids)
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();

    let body: Vec<BlogResponse> = blogs
        .into_iter()
        .map(|blog| blog_response_with_owner(blog, &owners))
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    principal: Principal,
    body: web::Json<NewBlogRequest>,
) -> ApiResult<HttpResponse> {
    let req = body.into_inner();
    let mut owner = principal.user;

    let blog = Blog::new(req.title, req.author, req.url, req.likes, owner.id)?;
    let saved = state.blogs.insert(blog).await?;

    // Read-modify-write append with no concurrency control: two
    // simultaneous creations by one user can lose an id here.
    owner.blogs.push(saved.id);
    state.users.update(owner).await?;

    Ok(HttpResponse::Created().json(blog_response(saved)))
}

/// PUT /api/blogs/{id}
///
/// Unauthenticated, and an unknown id yields 200 with a JSON `null` body
/// rather than an error. Both are long-standing behavior callers rely on.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_object_id(&path)?;
    let req = body.into_inner();

    let changes = BlogUpdate {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    };

    let updated = state.blogs.update(id, changes).await?;
    Ok(HttpResponse::Ok().json(updated.map(blog_response)))
}

/// DELETE /api/blogs/{id}
pub async fn remove(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_object_id(&path)?;

    let blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("no blog with id {id} to delete")))?;

    // Only the owner may delete. An ownerless blog matches no caller.
    if blog.user != Some(principal.user.id) {
        return Err(ApiError::Unauthorized);
    }

    state.blogs.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
