//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`PgBlogRepository`] - Blog post storage
//! - [`PgUserRepository`] - User account storage

pub mod pg_blog_repository;
pub mod pg_user_repository;

pub use pg_blog_repository::PgBlogRepository;
pub use pg_user_repository::PgUserRepository;
