//! Business logic services for the application layer.

pub mod blog_service;
pub mod user_service;

pub use blog_service::BlogService;
pub use user_service::UserService;
