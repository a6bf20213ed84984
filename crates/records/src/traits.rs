//! The `RecordTransform` trait — the contract every per-record transform
//! must fulfil.

use async_trait::async_trait;
use serde_json::Value;

use crate::TransformError;

/// Per-record transformation applied by the request handler.
#[async_trait]
pub trait RecordTransform: Send + Sync {
    /// Transform a single record and return the result.
    ///
    /// The handler discards the returned value; only the call and its
    /// failure matter to it.
    async fn apply(&self, record: &Value) -> Result<Value, TransformError>;
}

/// Name of a JSON value's kind, used in error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
