//! Failures of the SQLite snapshot store.
//!
//! Callers only ever see `xrates_core::Error`; the mapping lives here.

use diesel::result::Error as DieselError;
use thiserror::Error;
use xrates_core::errors::{DatabaseError, Error};

#[derive(Error, Debug)]
pub enum StorageError {
    /// The database file could not be created or opened.
    #[error("Cannot open database {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    Query(#[from] DieselError),

    #[error("Migration failed: {0}")]
    Migration(String),

    /// The writer task has exited, so writes cannot be applied.
    #[error("Database writer is not running")]
    WriterStopped,

    /// A write job rejected its own input; passed through unchanged.
    #[error(transparent)]
    Job(Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Open { .. } | StorageError::Pool(_) => {
                Error::Database(DatabaseError::ConnectionFailed(err.to_string()))
            }
            StorageError::Query(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::Migration(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::WriterStopped => {
                Error::Database(DatabaseError::Internal(err.to_string()))
            }
            StorageError::Job(e) => e,
        }
    }
}

/// Adds `.into_core()` to Diesel and r2d2 results.
pub trait IntoCore<T> {
    fn into_core(self) -> xrates_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> xrates_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> xrates_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
