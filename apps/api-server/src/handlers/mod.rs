//! HTTP handlers and route configuration.

mod blogs;
mod login;
mod users;


use actix_web::{HttpResponse, web};

use bloglist_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::remove)),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("", web::post().to(users::create)),
            )
            .service(web::scope("/login").route("", web::post().to(login::login))),
    );
}

/// Fallback for anything no route matched.
pub async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("unknown endpoint"))
}
