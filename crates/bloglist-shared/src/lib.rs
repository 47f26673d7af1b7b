//! # Bloglist Shared
//!
//! Wire types of the API surface: request/response DTOs and the error body.
//! Kept free of domain dependencies so any client can compile against it.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
