//! Handlers for blog endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::blog::{BlogItem, BlogStatsResponse, CreateBlogRequest, UpdateBlogRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all blogs.
///
/// # Endpoint
///
/// `GET /api/blogs`
pub async fn blog_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogItem>>, AppError> {
    let blogs = state.blog_service.list_blogs().await?;

    Ok(Json(blogs.into_iter().map(BlogItem::from).collect()))
}

/// Returns a single blog.
///
/// # Endpoint
///
/// `GET /api/blogs/{id}`
///
/// # Errors
///
/// Returns 404 if the blog does not exist.
pub async fn get_blog_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<BlogItem>, AppError> {
    let Path(id) = id?;
    let blog = state.blog_service.get_blog(id).await?;
    Ok(Json(blog.into()))
}

/// Creates a blog.
///
/// # Endpoint
///
/// `POST /api/blogs`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Type wars",
///   "author": "Robert C. Martin",   // optional
///   "url": "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
///   "likes": 2                      // optional, defaults to 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if `title` or `url` is missing or `likes` is negative.
pub async fn create_blog_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateBlogRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BlogItem>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let blog = state
        .blog_service
        .create_blog(payload.into_new_blog())
        .await?;

    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// Partially updates a blog.
///
/// # Endpoint
///
/// `PUT /api/blogs/{id}`
///
/// All fields are optional. `author: null` clears the author.
///
/// # Errors
///
/// Returns 400 if a provided field is invalid.
/// Returns 404 if the blog does not exist.
pub async fn update_blog_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateBlogRequest>, JsonRejection>,
) -> Result<Json<BlogItem>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let blog = state.blog_service.update_blog(id, payload.into()).await?;

    Ok(Json(blog.into()))
}

/// Deletes a blog.
///
/// # Endpoint
///
/// `DELETE /api/blogs/{id}`
///
/// Always answers 204 No Content, also when the blog was already gone.
pub async fn delete_blog_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.blog_service.delete_blog(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Like statistics over all blogs.
///
/// # Endpoint
///
/// `GET /api/blogs/stats`
///
/// # Response
///
/// ```json
/// {
///   "count": 4,
///   "total_likes": 34,
///   "favorite": { "id": 3, "title": "Canonical string reduction", "likes": 12, ... }
/// }
/// ```
///
/// `favorite` is `null` when there are no blogs.
pub async fn blog_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<BlogStatsResponse>, AppError> {
    let stats = state.blog_service.stats().await?;
    Ok(Json(stats.into()))
}
