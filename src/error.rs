//! Store-level failures.
//!
//! A missing row is not an error: lookups return `Ok(None)` and the caller
//! decides what absence means.

use rusqlite::ErrorCode;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The write was rejected by a table constraint, e.g. an employee
    /// pointing at a department that does not exist.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The database could not be reached or is held by another writer.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] rusqlite::Error),

    #[error("database error: {0}")]
    Sqlite(#[source] rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        let code = match &err {
            rusqlite::Error::SqliteFailure(e, _) => Some(e.code),
            _ => None,
        };

        match code {
            Some(ErrorCode::ConstraintViolation) => Self::ConstraintViolation(err.to_string()),
            Some(
                ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase
                | ErrorCode::SystemIoFailure,
            ) => Self::Unavailable(err),
            _ => Self::Sqlite(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(code: std::os::raw::c_int, msg: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(code), Some(msg.to_string()))
    }

    #[test]
    fn foreign_key_failure_is_a_constraint_violation() {
        let err = StoreError::from(failure(
            rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            "FOREIGN KEY constraint failed",
        ));
        match err {
            StoreError::ConstraintViolation(msg) => assert!(msg.contains("FOREIGN KEY")),
            other => panic!("expected constraint violation, got {other:?}"),
        }
    }

    #[test]
    fn busy_database_is_unavailable() {
        let err = StoreError::from(failure(rusqlite::ffi::SQLITE_BUSY, "database is locked"));
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn other_failures_stay_generic() {
        let err = StoreError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, StoreError::Sqlite(_)));
    }
}
