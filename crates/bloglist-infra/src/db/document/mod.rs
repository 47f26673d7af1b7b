//! BSON document shapes for the `blogs` and `users` collections.

mod blog;
mod user;

pub use blog::BlogDocument;
pub use user::UserDocument;
