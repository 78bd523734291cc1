//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{BlogService, UserService};
use crate::infrastructure::hashing::Argon2Hasher;
use crate::infrastructure::persistence::{PgBlogRepository, PgUserRepository};

/// Blog service backed by PostgreSQL.
pub type PgBlogService = BlogService<PgBlogRepository>;

/// User service backed by PostgreSQL and Argon2.
pub type PgUserService = UserService<PgUserRepository, Argon2Hasher>;

/// Services shared by all request handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<PgBlogService>,
    pub user_service: Arc<PgUserService>,
}

impl AppState {
    /// Wires repositories and services on top of a connection pool.
    pub fn new(pool: Arc<PgPool>, hasher: Argon2Hasher) -> Self {
        let blog_repository = Arc::new(PgBlogRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool));

        Self {
            blog_service: Arc::new(BlogService::new(blog_repository)),
            user_service: Arc::new(UserService::new(user_repository, Arc::new(hasher))),
        }
    }
}
