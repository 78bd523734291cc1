//! API route configuration.

use crate::api::handlers::{
    blog_list_handler, blog_stats_handler, create_blog_handler, create_user_handler,
    delete_blog_handler, get_blog_handler, update_blog_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /blogs`        - List blogs
/// - `POST   /blogs`        - Create a blog
/// - `GET    /blogs/stats`  - Like statistics over all blogs
/// - `GET    /blogs/{id}`   - Fetch a blog
/// - `PUT    /blogs/{id}`   - Partially update a blog
/// - `DELETE /blogs/{id}`   - Delete a blog
/// - `GET    /users`        - List users
/// - `POST   /users`        - Register a user
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(blog_list_handler).post(create_blog_handler))
        .route("/blogs/stats", get(blog_stats_handler))
        .route(
            "/blogs/{id}",
            get(get_blog_handler)
                .put(update_blog_handler)
                .delete(delete_blog_handler),
        )
        .route("/users", get(user_list_handler).post(create_user_handler))
}
