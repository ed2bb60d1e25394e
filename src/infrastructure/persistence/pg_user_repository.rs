//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::utils::db_error::classify_write_error;

/// PostgreSQL repository for user storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Uniqueness of
/// `user_name` is enforced by the `users_user_name_key` constraint, not here.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn exists(&self, user_name: &str) -> Result<bool, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE user_name = $1")
            .bind(user_name)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        if !new_user.has_required_fields() {
            return Err(RepositoryError::Validation(
                "user name and email are required".to_string(),
            ));
        }

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (user_name, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&new_user.user_name)
        .bind(&new_user.email)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(classify_write_error)?;

        tracing::debug!(id, user_name = %new_user.user_name, "user row inserted");

        Ok(new_user.with_id(id))
    }

    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        // Zero affected rows is not an error: existence is not checked.
        sqlx::query(
            r#"
            UPDATE users SET
                user_name = $2,
                email     = $3
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(&user.user_name)
        .bind(&user.email)
        .execute(self.pool.as_ref())
        .await
        .map_err(classify_write_error)?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;

        Ok(())
    }
}
