use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

/// Failures surfaced by the persistence layer.
///
/// Constraint violations are classified from SQLite's extended result codes
/// so that the API layer can pick a status code without looking at message text.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("record not found")]
    NotFound,

    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("database connection lock poisoned")]
    Poisoned,

    #[error("blocking database task failed: {0}")]
    Blocking(String),

    #[error(transparent)]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for DbError {
    fn from(error: rusqlite::Error) -> Self {
        let constraint = match &error {
            rusqlite::Error::SqliteFailure(failure, _)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Some(failure.extended_code)
            }
            _ => None,
        };

        match constraint {
            Some(ffi::SQLITE_CONSTRAINT_UNIQUE) | Some(ffi::SQLITE_CONSTRAINT_PRIMARYKEY) => {
                DbError::UniqueViolation(error.to_string())
            }
            Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
                DbError::ForeignKeyViolation(error.to_string())
            }
            _ => match error {
                rusqlite::Error::QueryReturnedNoRows => DbError::NotFound,
                other => DbError::Sqlite(other),
            },
        }
    }
}
