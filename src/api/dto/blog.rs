//! DTOs for blog endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::blog_stats::BlogStats;
use crate::domain::entities::{Blog, BlogPatch, NewBlog};

/// Request body for `POST /api/blogs`.
///
/// `title` and `url` are optional at the JSON level so that a missing field
/// is reported as a validation error (400) rather than a body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(required(message = "title is required"), length(min = 1))]
    pub title: Option<String>,

    pub author: Option<String>,

    #[validate(required(message = "url is required"), length(min = 1))]
    pub url: Option<String>,

    /// Defaults to 0 when absent.
    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

impl CreateBlogRequest {
    /// Converts a validated request into a [`NewBlog`].
    ///
    /// Call only after [`Validate::validate`] succeeded.
    pub fn into_new_blog(self) -> NewBlog {
        NewBlog {
            title: self.title.unwrap_or_default(),
            author: self.author,
            url: self.url.unwrap_or_default(),
            likes: self.likes.unwrap_or(0),
        }
    }
}

/// Request body for `PUT /api/blogs/{id}`.
///
/// All fields are optional; only provided fields are changed.
///
/// # `author` semantics
///
/// - **Absent** → leave unchanged
/// - **`null`** → clear the author
/// - **String** → set new author
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub author: Option<Option<String>>,

    #[validate(length(min = 1))]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

impl From<UpdateBlogRequest> for BlogPatch {
    fn from(r: UpdateBlogRequest) -> Self {
        BlogPatch {
            title: r.title,
            author: r.author,
            url: r.url,
            likes: r.likes,
        }
    }
}

/// JSON representation of a blog.
#[derive(Debug, Clone, Serialize)]
pub struct BlogItem {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

impl From<Blog> for BlogItem {
    fn from(b: Blog) -> Self {
        BlogItem {
            id: b.id,
            title: b.title,
            author: b.author,
            url: b.url,
            likes: b.likes,
        }
    }
}

/// Response for `GET /api/blogs/stats`.
///
/// `favorite` is `null` only when there are no blogs.
#[derive(Debug, Serialize)]
pub struct BlogStatsResponse {
    pub count: usize,
    /// Wider than a single like count so the sum never overflows.
    pub total_likes: i128,
    pub favorite: Option<BlogItem>,
}

impl From<BlogStats<Blog>> for BlogStatsResponse {
    fn from(s: BlogStats<Blog>) -> Self {
        BlogStatsResponse {
            count: s.count,
            total_likes: s.total_likes,
            favorite: s.favorite.map(BlogItem::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_missing_title_fails_validation() {
        let req: CreateBlogRequest =
            serde_json::from_value(json!({ "author": "Robert C. Martin", "likes": 2 })).unwrap();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("url"));
    }

    #[test]
    fn test_create_request_defaults_likes_to_zero() {
        let req: CreateBlogRequest = serde_json::from_value(json!({
            "title": "Type wars",
            "url": "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html"
        }))
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.into_new_blog().likes, 0);
    }

    #[test]
    fn test_create_request_negative_likes_fails_validation() {
        let req: CreateBlogRequest =
            serde_json::from_value(json!({ "title": "t", "url": "u", "likes": -1 })).unwrap();

        assert!(req.validate().unwrap_err().field_errors().contains_key("likes"));
    }

    #[test]
    fn test_update_request_author_tri_state() {
        let absent: UpdateBlogRequest = serde_json::from_value(json!({ "title": "x" })).unwrap();
        assert_eq!(absent.author, None);

        let cleared: UpdateBlogRequest = serde_json::from_value(json!({ "author": null })).unwrap();
        assert_eq!(cleared.author, Some(None));

        let set: UpdateBlogRequest =
            serde_json::from_value(json!({ "author": "Martin Fowler" })).unwrap();
        assert_eq!(set.author, Some(Some("Martin Fowler".to_string())));
    }

    #[test]
    fn test_blog_item_serializes_id() {
        let blog = Blog::new(
            9,
            "t".to_string(),
            None,
            "u".to_string(),
            3,
            chrono::Utc::now(),
        );

        let value = serde_json::to_value(BlogItem::from(blog)).unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["likes"], 3);
        assert!(value.get("created_at").is_none());
    }
}
