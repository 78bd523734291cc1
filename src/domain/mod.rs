//! Domain layer containing business entities and logic.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository and hasher traits define contracts implemented by the
//! infrastructure layer; orchestration lives in
//! [`crate::application::services`].
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`hashing`] - Password hashing contract
//! - [`blog_stats`] - Pure statistics over lists of blog posts

pub mod blog_stats;
pub mod entities;
pub mod hashing;
pub mod repositories;
