//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request body for `POST /api/users`.
///
/// Length rules live in the user service; here we only require presence.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required(message = "username is required"))]
    pub username: Option<String>,

    pub name: Option<String>,

    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
}

/// JSON representation of a user. Never includes the password hash.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        UserItem {
            id: u.id,
            username: u.username,
            name: u.name,
        }
    }
}
