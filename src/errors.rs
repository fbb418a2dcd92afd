//! Unified error type for the library manager.
//!
//! Constraint violations (unique, foreign key, check) are raised by the database
//! and surface unchanged through [`Error::Database`].

use thiserror::Error;

/// Errors produced by configuration, persistence and entity operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any error raised by `SeaORM` or the underlying driver
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A row looked up by primary key or unique key does not exist
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Entity name, e.g. `"Member"`
        entity: &'static str,
        /// The key that was looked up
        key: String,
    },

    /// A value falls outside the set a column accepts
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue {
        /// Column or field name
        field: &'static str,
        /// Offending value
        value: String,
    },

    /// I/O failure, e.g. reading `config.toml`
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    /// Shorthand for a [`Error::NotFound`] keyed by a numeric id.
    #[must_use]
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound {
            entity,
            key: id.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
