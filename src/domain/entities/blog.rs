//! Blog post entity.

use chrono::{DateTime, Utc};

use crate::domain::blog_stats::Liked;

/// A persisted blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Creates a new Blog instance.
    pub fn new(
        id: i64,
        title: String,
        author: Option<String>,
        url: String,
        likes: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            url,
            likes,
            created_at,
        }
    }
}

impl Liked for Blog {
    fn likes(&self) -> i64 {
        self.likes
    }
}

/// Input data for creating a new blog post.
///
/// `likes` has already been defaulted to `0` when the request omitted it.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

/// Partial update for an existing blog post.
///
/// `None` fields are left unchanged.
/// `author: Some(None)` clears the author; `Some(Some(a))` sets it.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<Option<String>>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl BlogPatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.url.is_none() && self.likes.is_none()
    }
}
