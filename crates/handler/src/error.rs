//! Handler-level error types.

use thiserror::Error;

/// Errors produced while handling a request.
///
/// Both variants are passed straight through from the collaborators; the
/// handler never retries or recovers.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The data source failed to execute the query.
    #[error("database error: {0}")]
    Database(#[from] db::DbError),

    /// The per-record transform failed.
    #[error("transform error: {0}")]
    Transform(#[from] records::TransformError),
}
