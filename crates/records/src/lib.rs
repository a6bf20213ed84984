//! `records` crate — the `RecordTransform` trait and its implementations.
//!
//! The request handler applies a [`RecordTransform`] to every record a data
//! source returns. [`ExpensiveUppercase`] is the production transform,
//! [`mock::MockTransform`] the test double.

pub mod error;
pub mod traits;
pub mod uppercase;
pub mod mock;

pub use error::TransformError;
pub use traits::RecordTransform;
pub use uppercase::ExpensiveUppercase;
