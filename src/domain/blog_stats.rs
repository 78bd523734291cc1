//! Pure aggregate statistics over a list of blog posts.
//!
//! Every function here borrows its input, performs no I/O, and never mutates
//! the slice it is given. Records only need to expose a like count through
//! the [`Liked`] trait, so the same helpers work for persisted [`Blog`]s,
//! test fixtures, or any other post-like type.
//!
//! [`Blog`]: crate::domain::entities::Blog

/// A record that carries a like count.
pub trait Liked {
    /// Number of likes on this record. Never negative for stored posts.
    fn likes(&self) -> i64;
}

impl<T: Liked + ?Sized> Liked for &T {
    fn likes(&self) -> i64 {
        (**self).likes()
    }
}

/// Errors produced by the aggregate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// The operation has no identity element and the input was empty.
    #[error("cannot pick a favorite from an empty list of blogs")]
    EmptyInput,
}

/// Always returns `1`, whatever the input.
///
/// Kept as a smoke-test entry point for the statistics module.
pub fn placeholder<T>(_posts: &[T]) -> u32 {
    1
}

/// Sums the likes of all posts. An empty slice yields `0`.
///
/// The sum is widened to `i128` so that any number of `i64` like counts adds
/// up without overflow.
pub fn total_likes<T: Liked>(posts: &[T]) -> i128 {
    posts.iter().map(|p| i128::from(p.likes())).sum()
}

/// Returns the post with the most likes.
///
/// Posts are scanned left to right and a later post only replaces the current
/// favorite when its like count is strictly greater, so the first post
/// reaching the maximum wins ties.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `posts` is empty.
pub fn favorite_blog<T: Liked>(posts: &[T]) -> Result<&T, StatsError> {
    let (first, rest) = posts.split_first().ok_or(StatsError::EmptyInput)?;

    Ok(rest.iter().fold(first, |best, post| {
        if post.likes() > best.likes() {
            post
        } else {
            best
        }
    }))
}

/// Summary of a list of posts, as served by `GET /api/blogs/stats`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogStats<T> {
    pub count: usize,
    pub total_likes: i128,
    /// `None` only when the list was empty.
    pub favorite: Option<T>,
}

impl<T: Liked + Clone> BlogStats<T> {
    /// Computes all statistics for `posts` in one pass over the helpers above.
    pub fn from_posts(posts: &[T]) -> Self {
        let favorite = match favorite_blog(posts) {
            Ok(post) => Some(post.clone()),
            Err(StatsError::EmptyInput) => None,
        };

        Self {
            count: posts.len(),
            total_likes: total_likes(posts),
            favorite,
        }
    }
}
