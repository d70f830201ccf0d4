//! # Store Errors
//!
//! Error types for the store module.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// The constraint variants are raised by [`super::MemoryStore`]; PostgreSQL
/// reports the same violations through [`StoreError::Database`].
#[derive(Debug, Error)]
pub enum StoreError {
    // ==================
    // Constraint Errors
    // ==================
    /// Category foreign key violated
    #[error("category {0} does not exist")]
    ForeignKey(i32),

    /// NULL written to a NOT NULL column
    #[error("null value in column \"{0}\" violates not-null constraint")]
    NotNull(&'static str),

    /// Value cannot be stored in the column's type
    #[error("invalid value for column \"{column}\": {value}")]
    TypeMismatch { column: &'static str, value: String },

    /// No id left for a new question
    #[error("question id sequence exhausted")]
    IdsExhausted,

    // ==================
    // Backend Errors
    // ==================
    /// Error reported by the database driver
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store cannot serve requests
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Seed data could not be read or is inconsistent
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

impl StoreError {
    pub(crate) fn type_mismatch(column: &'static str, value: impl ToString) -> Self {
        Self::TypeMismatch {
            column,
            value: value.to_string(),
        }
    }
}
