//! Blog post management service.

use crate::domain::blog_stats::BlogStats;
use crate::domain::entities::{Blog, BlogPatch, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading, updating and deleting blog posts.
pub struct BlogService<R: BlogRepository> {
    repository: Arc<R>,
}

impl<R: BlogRepository> BlogService<R> {
    /// Creates a new blog service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all blogs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a single blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_blog(&self, id: i64) -> Result<Blog, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))
    }

    /// Stores a new blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title or url is blank or likes is negative.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_blog(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        validate_required("title", &new_blog.title)?;
        validate_required("url", &new_blog.url)?;
        validate_likes(new_blog.likes)?;

        let blog = self.repository.create(new_blog).await?;
        tracing::info!(blog_id = blog.id, "Blog created");
        Ok(blog)
    }

    /// Applies a partial update to a blog.
    ///
    /// An empty patch returns the blog unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    /// Returns [`AppError::Validation`] if a provided field is invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_blog(&self, id: i64, patch: BlogPatch) -> Result<Blog, AppError> {
        if let Some(title) = &patch.title {
            validate_required("title", title)?;
        }
        if let Some(url) = &patch.url {
            validate_required("url", url)?;
        }
        if let Some(likes) = patch.likes {
            validate_likes(likes)?;
        }

        if patch.is_empty() {
            return self.get_blog(id).await;
        }

        self.repository
            .update_by_id(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))
    }

    /// Deletes a blog.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_blog(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete_by_id(id).await? {
            tracing::info!(blog_id = id, "Blog deleted");
        } else {
            tracing::debug!(blog_id = id, "Delete requested for missing blog");
        }
        Ok(())
    }

    /// Computes like statistics over every stored blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self) -> Result<BlogStats<Blog>, AppError> {
        let blogs = self.repository.find_all().await?;
        Ok(BlogStats::from_posts(&blogs))
    }

    /// Counts stored blogs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_blogs(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn validate_required(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            format!("`{field}` is required"),
            json!({ "field": field }),
        ));
    }
    Ok(())
}

fn validate_likes(likes: i64) -> Result<(), AppError> {
    if likes < 0 {
        return Err(AppError::bad_request(
            "`likes` must not be negative",
            json!({ "likes": likes }),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBlogRepository;
    use chrono::Utc;

    fn create_test_blog(id: i64, title: &str, likes: i64) -> Blog {
        Blog::new(
            id,
            title.to_string(),
            Some("Edsger W. Dijkstra".to_string()),
            format!("https://example.com/{id}"),
            likes,
            Utc::now(),
        )
    }

    fn new_blog(title: &str, url: &str, likes: i64) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            author: None,
            url: url.to_string(),
            likes,
        }
    }

    #[tokio::test]
    async fn test_list_blogs() {
        let mut mock_repo = MockBlogRepository::new();

        let blogs = vec![create_test_blog(1, "a", 1), create_test_blog(2, "b", 2)];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(blogs.clone()));

        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.list_blogs().await.unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_get_blog_not_found() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.get_blog(42).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_blog_success() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_create()
            .withf(|b| b.title == "Type wars" && b.likes == 0)
            .times(1)
            .returning(|b| Ok(Blog::new(1, b.title, b.author, b.url, b.likes, Utc::now())));

        let service = BlogService::new(Arc::new(mock_repo));

        let blog = service
            .create_blog(new_blog("Type wars", "http://blog.cleancoder.com", 0))
            .await
            .unwrap();

        assert_eq!(blog.id, 1);
        assert_eq!(blog.likes, 0);
    }

    #[tokio::test]
    async fn test_create_blog_blank_title() {
        let mock_repo = MockBlogRepository::new();
        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.create_blog(new_blog("  ", "http://x.com", 0)).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_blog_blank_url() {
        let mock_repo = MockBlogRepository::new();
        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.create_blog(new_blog("title", "", 0)).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_blog_negative_likes() {
        let mock_repo = MockBlogRepository::new();
        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.create_blog(new_blog("title", "http://x.com", -1)).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_blog_success() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_update_by_id()
            .withf(|id, p| *id == 1 && p.title.as_deref() == Some("random title"))
            .times(1)
            .returning(|_, _| Ok(Some(create_test_blog(1, "random title", 3))));

        let service = BlogService::new(Arc::new(mock_repo));

        let patch = BlogPatch {
            title: Some("random title".to_string()),
            ..Default::default()
        };
        let blog = service.update_blog(1, patch).await.unwrap();

        assert_eq!(blog.title, "random title");
    }

    #[tokio::test]
    async fn test_update_blog_not_found() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_update_by_id()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = BlogService::new(Arc::new(mock_repo));

        let patch = BlogPatch {
            likes: Some(5),
            ..Default::default()
        };
        let result = service.update_blog(99, patch).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_blog_empty_patch_reads_current() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo.expect_update_by_id().never();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(create_test_blog(id, "unchanged", 1))));

        let service = BlogService::new(Arc::new(mock_repo));

        let blog = service.update_blog(7, BlogPatch::default()).await.unwrap();
        assert_eq!(blog.title, "unchanged");
    }

    #[tokio::test]
    async fn test_update_blog_rejects_negative_likes() {
        let mock_repo = MockBlogRepository::new();
        let service = BlogService::new(Arc::new(mock_repo));

        let patch = BlogPatch {
            likes: Some(-3),
            ..Default::default()
        };
        let result = service.update_blog(1, patch).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_blog_is_ok() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Ok(false));

        let service = BlogService::new(Arc::new(mock_repo));

        assert!(service.delete_blog(123).await.is_ok());
    }

    #[tokio::test]
    async fn test_stats() {
        let mut mock_repo = MockBlogRepository::new();

        let blogs = vec![
            create_test_blog(1, "a", 7),
            create_test_blog(2, "b", 5),
            create_test_blog(3, "c", 12),
            create_test_blog(4, "d", 10),
        ];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(blogs.clone()));

        let service = BlogService::new(Arc::new(mock_repo));

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.total_likes, 34);
        assert_eq!(stats.favorite.unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_stats_without_blogs() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![]));

        let service = BlogService::new(Arc::new(mock_repo));

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_likes, 0);
        assert!(stats.favorite.is_none());
    }
}
