//! User management service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::error::AppError;
use std::sync::Arc;

const MSG_REQUIRED_FIELDS: &str = "User name and email are required";
const MSG_ALREADY_EXISTS: &str = "User already exists";

/// Service translating user operations into repository calls.
///
/// Each operation is one linear transaction: validate, call the repository,
/// classify the outcome. Failures are logged with the operation name before
/// being returned, so handlers only have to render them.
///
/// Creation checks for an existing `user_name` first, but the unique
/// constraint in the store remains the actual guarantee: two concurrent
/// creates may both pass the check, and the loser surfaces as a conflict.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository
            .list()
            .await
            .map_err(|e| storage_failure("list_users", "Failed to fetch users", &e))
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `user_name` or `email` is empty.
    /// Returns [`AppError::Conflict`] if the user name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, user_name: String, email: String) -> Result<User, AppError> {
        const OP: &str = "create_user";

        let new_user = NewUser { user_name, email };
        if !new_user.has_required_fields() {
            tracing::warn!(operation = OP, "missing required fields");
            return Err(AppError::bad_request(MSG_REQUIRED_FIELDS));
        }

        let exists = self
            .repository
            .exists(&new_user.user_name)
            .await
            .map_err(|e| storage_failure(OP, "Error checking existing user", &e))?;

        if exists {
            tracing::warn!(operation = OP, user_name = %new_user.user_name, "user already exists");
            return Err(AppError::conflict(MSG_ALREADY_EXISTS));
        }

        match self.repository.create(new_user).await {
            Ok(user) => {
                tracing::info!(operation = OP, id = user.id, user_name = %user.user_name, "user created");
                Ok(user)
            }
            Err(RepositoryError::Duplicate { constraint }) => {
                tracing::warn!(operation = OP, ?constraint, "duplicate user rejected by store");
                Err(AppError::conflict(MSG_ALREADY_EXISTS))
            }
            Err(RepositoryError::Validation(reason)) => {
                tracing::warn!(operation = OP, %reason, "user rejected by repository");
                Err(AppError::bad_request(MSG_REQUIRED_FIELDS))
            }
            Err(e) => Err(storage_failure(OP, "Failed to create user", &e)),
        }
    }

    /// Overwrites the user with the given `id`.
    ///
    /// Existence is not verified: updating an unknown `id` succeeds and
    /// changes nothing. Fields are written as given, empty strings included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(
        &self,
        id: i64,
        user_name: String,
        email: String,
    ) -> Result<User, AppError> {
        let user = User::new(id, user_name, email);

        self.repository
            .update(&user)
            .await
            .map_err(|e| storage_failure("update_user", "Failed to update user", &e))?;

        tracing::info!(operation = "update_user", id, "user updated");

        Ok(user)
    }

    /// Deletes the user with the given `id`.
    ///
    /// Deleting an unknown `id` succeeds, which makes the operation idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| storage_failure("delete_user", "Failed to delete user", &e))
    }

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`RepositoryError`] so callers can report it.
    pub async fn check_database(&self) -> Result<(), RepositoryError> {
        self.repository.ping().await
    }
}

/// Logs a storage failure with its cause and returns the generic client error.
fn storage_failure(operation: &'static str, message: &str, e: &RepositoryError) -> AppError {
    tracing::error!(operation, error = %e, "{message}");
    AppError::internal(message)
}
