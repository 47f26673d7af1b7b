//! Domain entities - the core business objects.

mod blog;

mod user;

pub use blog::{Blog, BlogUpdate};
pub use user::{DUPLICATE_USERNAME_ERROR, User};
