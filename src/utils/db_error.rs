//! Classification of driver errors into repository errors.

use crate::domain::repositories::RepositoryError;

/// Returns `true` if the error is a unique-constraint violation (SQLSTATE 23505).
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}

/// Maps a write failure to [`RepositoryError`], keeping uniqueness violations distinct.
pub fn classify_write_error(e: sqlx::Error) -> RepositoryError {
    if is_unique_violation(&e) {
        let constraint = e
            .as_database_error()
            .and_then(|db| db.constraint())
            .map(str::to_owned);
        return RepositoryError::Duplicate { constraint };
    }

    RepositoryError::Database(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }

    #[test]
    fn test_classify_passes_through_other_errors() {
        let err = classify_write_error(sqlx::Error::PoolTimedOut);

        assert!(matches!(
            err,
            RepositoryError::Database(sqlx::Error::PoolTimedOut)
        ));
    }
}
