//! User account service.

use crate::domain::entities::{NewUser, User};
use crate::domain::hashing::CredentialHasher;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Minimum username length, in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Minimum plaintext password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Service for registering and listing users.
///
/// Passwords are hashed through the [`CredentialHasher`] before they reach
/// the repository; the plaintext is never stored.
pub struct UserService<R: UserRepository, H: CredentialHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: CredentialHasher> UserService<R, H> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }

    /// Registers a new user.
    ///
    /// # Validation
    ///
    /// - `password` must have at least 3 characters (checked first)
    /// - `username` must have at least 3 characters
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails or the username is taken.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn create_user(
        &self,
        username: String,
        name: Option<String>,
        password: &str,
    ) -> Result<User, AppError> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(
                "password too short",
                json!({ "min": MIN_PASSWORD_LENGTH }),
            ));
        }

        if username.chars().count() < MIN_USERNAME_LENGTH {
            return Err(AppError::bad_request(
                "username too short",
                json!({ "min": MIN_USERNAME_LENGTH }),
            ));
        }

        let password_hash = self.hasher.hash(password).await?;

        let user = self
            .repository
            .create(NewUser {
                username,
                name,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::not_found("User not found", json!({ "id": id })));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hashing::MockCredentialHasher;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn service(
        repo: MockUserRepository,
        hasher: MockCredentialHasher,
    ) -> UserService<MockUserRepository, MockCredentialHasher> {
        UserService::new(Arc::new(repo), Arc::new(hasher))
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut mock_repo = MockUserRepository::new();
        let mut mock_hasher = MockCredentialHasher::new();

        mock_hasher
            .expect_hash()
            .withf(|p| p == "salainen")
            .times(1)
            .returning(|_| Ok("$argon2id$hashed".to_string()));

        mock_repo
            .expect_create()
            .withf(|u| u.username == "mluukkai" && u.password_hash == "$argon2id$hashed")
            .times(1)
            .returning(|u| {
                Ok(User::new(
                    1,
                    u.username,
                    u.name,
                    u.password_hash,
                    Utc::now(),
                ))
            });

        let user = service(mock_repo, mock_hasher)
            .create_user(
                "mluukkai".to_string(),
                Some("Matti Luukkainen".to_string()),
                "salainen",
            )
            .await
            .unwrap();

        assert_eq!(user.username, "mluukkai");
        assert_ne!(user.password_hash, "salainen");
    }

    #[tokio::test]
    async fn test_create_user_password_too_short() {
        let mock_repo = MockUserRepository::new();
        let mut mock_hasher = MockCredentialHasher::new();
        mock_hasher.expect_hash().never();

        let result = service(mock_repo, mock_hasher)
            .create_user("mluukkai".to_string(), None, "ab")
            .await;

        match result.unwrap_err() {
            AppError::Validation { message, .. } => assert_eq!(message, "password too short"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_user_short_password_reported_before_short_username() {
        let mock_repo = MockUserRepository::new();
        let mut mock_hasher = MockCredentialHasher::new();
        mock_hasher.expect_hash().never();

        let result = service(mock_repo, mock_hasher)
            .create_user("ab".to_string(), None, "x")
            .await;

        match result.unwrap_err() {
            AppError::Validation { message, .. } => assert_eq!(message, "password too short"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_user_username_too_short() {
        let mock_repo = MockUserRepository::new();
        let mock_hasher = MockCredentialHasher::new();

        let result = service(mock_repo, mock_hasher)
            .create_user("ml".to_string(), None, "salainen")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let mut mock_repo = MockUserRepository::new();
        let mut mock_hasher = MockCredentialHasher::new();

        mock_hasher
            .expect_hash()
            .returning(|_| Ok("hash".to_string()));
        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::bad_request(
                "expected `username` to be unique",
                json!({}),
            ))
        });

        let result = service(mock_repo, mock_hasher)
            .create_user("root".to_string(), None, "salainen")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_find_all().times(1).returning(|| {
            Ok(vec![User::new(
                1,
                "root".to_string(),
                None,
                "hash".to_string(),
                Utc::now(),
            )])
        });

        let users = service(mock_repo, MockCredentialHasher::new())
            .list_users()
            .await
            .unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "root");
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Ok(false));

        let result = service(mock_repo, MockCredentialHasher::new())
            .delete_user(5)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
