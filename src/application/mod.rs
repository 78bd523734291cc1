//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::blog_service::BlogService`] - Blog post CRUD and statistics
//! - [`services::user_service::UserService`] - User registration and listing

pub mod services;
