//! # Store Errors

use thiserror::Error;

/// Errors raised by the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The query matched no rows.
    #[error("record not found")]
    NotFound,

    /// Any other database failure, passed through unchanged.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
