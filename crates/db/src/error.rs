//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Failure reported by a non-Postgres data source.
    #[error("data source error: {0}")]
    Source(String),
}
