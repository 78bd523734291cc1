//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; PostgreSQL implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for unit tests.
//!
//! - [`BlogRepository`] - Blog post CRUD
//! - [`UserRepository`] - User account storage
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod blog_repository;
pub mod user_repository;

pub use blog_repository::BlogRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
