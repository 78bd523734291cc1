//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, UserItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserItem::from).collect()))
}

/// Registers a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "username": "mluukkai", "name": "Matti Luukkainen", "password": "salainen" }
/// ```
///
/// # Errors
///
/// Returns 400 if the password or username is shorter than 3 characters,
/// a required field is missing, or the username is already taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let CreateUserRequest {
        username,
        name,
        password,
    } = payload;

    let user = state
        .user_service
        .create_user(
            username.unwrap_or_default(),
            name,
            password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
