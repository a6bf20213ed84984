//! `MockTransform` — a test double for `RecordTransform`.
//!
//! Useful in unit and integration tests where the real transform's delay is
//! irrelevant.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::{RecordTransform, TransformError};

/// Behaviour injected into `MockTransform` at construction time.
pub enum MockBehaviour {
    /// Return a specific JSON value.
    ReturnValue(Value),
    /// Fail with `TransformError::Unsupported`.
    Fail(&'static str),
}

/// A mock transform that records every record it receives and returns a
/// programmer-specified result.
pub struct MockTransform {
    /// What the transform will do when `apply` is called.
    pub behaviour: MockBehaviour,
    /// All records seen by this transform (in call order).
    pub calls: Arc<Mutex<Vec<Value>>>,
}

impl MockTransform {
    /// Create a mock that always succeeds with the given value.
    pub fn returning(value: Value) -> Self {
        Self {
            behaviour: MockBehaviour::ReturnValue(value),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always fails, reporting `kind` as the record kind.
    pub fn failing(kind: &'static str) -> Self {
        Self {
            behaviour: MockBehaviour::Fail(kind),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times this transform has been applied.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Records received so far, in call order.
    pub fn seen(&self) -> Vec<Value> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordTransform for MockTransform {
    async fn apply(&self, record: &Value) -> Result<Value, TransformError> {
        self.calls.lock().unwrap().push(record.clone());

        match &self.behaviour {
            MockBehaviour::ReturnValue(v) => Ok(v.clone()),
            MockBehaviour::Fail(kind) => Err(TransformError::Unsupported { kind: *kind }),
        }
    }
}
