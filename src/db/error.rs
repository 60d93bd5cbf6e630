//! Error types for the data access layer.
//!
//! [`DbError`] is returned by every repository operation. Store failures
//! pass through unchanged; the only domain-specific variant is
//! [`DbError::TaskNotFound`], which the HTTP layer translates into a
//! distinct 404 response.

use thiserror::Error;

/// Errors produced by repository operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// A single-task lookup matched zero rows.
    #[error("task with id {0} not found")]
    TaskNotFound(i64),

    /// SQLite error (connection, constraint violation, row decode).
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

/// Convenience alias for repository results.
pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_not_found_display() {
        let err = DbError::TaskNotFound(7);
        assert_eq!(err.to_string(), "task with id 7 not found");
    }

    #[test]
    fn sqlite_error_passes_through() {
        let err = DbError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, DbError::Sqlite(_)));
        assert!(err.to_string().contains("sqlite error"));
    }
}
