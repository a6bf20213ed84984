//! Transform-level error type.

use thiserror::Error;

/// Errors returned by a transform's `apply` method.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The record lacks the capability the transform needs.
    #[error("record of kind '{kind}' does not support uppercasing")]
    Unsupported { kind: &'static str },
}
