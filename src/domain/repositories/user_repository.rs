//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use async_trait::async_trait;

/// Failures reported by a [`UserRepository`].
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The record was rejected before any statement was issued.
    #[error("invalid user: {0}")]
    Validation(String),

    /// The store rejected the write because of a uniqueness constraint.
    #[error("duplicate user (constraint: {})", constraint.as_deref().unwrap_or("unknown"))]
    Duplicate { constraint: Option<String> },

    /// Any other store failure: connectivity, query, row decoding.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository interface for managing users.
///
/// Every operation is a single autocommitted statement. `update` and `delete`
/// do not verify that the target row exists.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns `true` if a user with this name exists.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    async fn exists(&self, user_name: &str) -> Result<bool, RepositoryError>;

    /// Lists all users in insertion order.
    ///
    /// Returns an empty vector when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query or row decoding failure.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Inserts a new user and returns it with the store-assigned `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Validation`] if `user_name` or `email` is empty.
    /// Returns [`RepositoryError::Duplicate`] if `user_name` is already taken.
    /// Returns [`RepositoryError::Database`] on any other failure.
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;

    /// Overwrites `user_name` and `email` of the row matching `user.id`.
    ///
    /// Succeeds without effect when no row matches.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Duplicate`] if the new `user_name` is taken.
    /// Returns [`RepositoryError::Database`] on any other failure.
    async fn update(&self, user: &User) -> Result<(), RepositoryError>;

    /// Deletes the row matching `id`.
    ///
    /// Succeeds without effect when no row matches.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on failure.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Performs a trivial round trip to check connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] if the store is unreachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
