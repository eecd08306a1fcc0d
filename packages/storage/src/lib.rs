// ABOUTME: Data layer and persistence for Tagdeck
// ABOUTME: Storage errors, connection configuration, and SQLite pool setup with migrations

use thiserror::Error;

pub mod config;
pub mod pool;

pub use config::StorageConfig;
pub use pool::{open_in_memory, open_pool};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Duplicate name: {0}")]
    DuplicateName(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Classify a sqlx error, surfacing constraint violations as their own variants.
    ///
    /// `context` names the value the statement was writing and ends up in the
    /// error message.
    pub fn from_sqlx(err: sqlx::Error, context: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StorageError::DuplicateName(context.to_string());
            }
            if db_err.is_foreign_key_violation() {
                return StorageError::InvalidInput(format!(
                    "{} references a missing record",
                    context
                ));
            }
        }
        StorageError::Sqlx(err)
    }

    /// True when the error was caused by the values handed to the store
    /// rather than by the store itself.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            StorageError::NotFound | StorageError::DuplicateName(_) | StorageError::InvalidInput(_)
        )
    }
}
