//! PostgreSQL implementation of the blog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Blog, BlogPatch, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    author: Option<String>,
    url: String,
    likes: i64,
    created_at: DateTime<Utc>,
}

impl From<BlogRow> for Blog {
    fn from(r: BlogRow) -> Self {
        Blog::new(r.id, r.title, r.author, r.url, r.likes, r.created_at)
    }
}

/// PostgreSQL repository for blog posts.
pub struct PgBlogRepository {
    pool: Arc<PgPool>,
}

impl PgBlogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, AppError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, author, url, likes, created_at
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, author, url, likes, created_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Blog::from))
    }

    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            INSERT INTO blogs (title, author, url, likes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, url, likes, created_at
            "#,
        )
        .bind(new_blog.title)
        .bind(new_blog.author)
        .bind(new_blog.url)
        .bind(new_blog.likes)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update_by_id(&self, id: i64, patch: BlogPatch) -> Result<Option<Blog>, AppError> {
        let update_author = patch.author.is_some();
        let new_author = patch.author.flatten();

        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            UPDATE blogs SET
                title  = COALESCE($2::TEXT, title),
                author = CASE WHEN $3 THEN $4::TEXT ELSE author END,
                url    = COALESCE($5::TEXT, url),
                likes  = COALESCE($6::BIGINT, likes)
            WHERE id = $1
            RETURNING id, title, author, url, likes, created_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(update_author)
        .bind(new_author)
        .bind(patch.url)
        .bind(patch.likes)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Blog::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
