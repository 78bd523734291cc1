//! Core domain entities.
//!
//! Entities are plain data structures. Each has a companion struct used for
//! creation (`NewBlog`, `NewUser`) and, where updates are supported, a patch
//! struct (`BlogPatch`).
//!
//! - [`Blog`] - A blog post with its like count
//! - [`User`] - A user account with a hashed password

pub mod blog;
pub mod user;

pub use blog::{Blog, BlogPatch, NewBlog};
pub use user::{NewUser, User};
