//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`hashing`] - Argon2 password hashing

pub mod hashing;
pub mod persistence;
