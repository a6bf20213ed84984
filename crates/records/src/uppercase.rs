//! `ExpensiveUppercase` — sleeps to simulate cost, then uppercases.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::traits::kind_of;
use crate::{RecordTransform, TransformError};

/// Pause applied before each record when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Uppercases textual records after a fixed pause.
#[derive(Debug, Clone)]
pub struct ExpensiveUppercase {
    /// How long each call waits before producing its result.
    pub delay: Duration,
}

impl ExpensiveUppercase {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for ExpensiveUppercase {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl RecordTransform for ExpensiveUppercase {
    async fn apply(&self, record: &Value) -> Result<Value, TransformError> {
        tokio::time::sleep(self.delay).await;

        match record {
            Value::String(s) => {
                debug!(len = s.len(), "uppercased record");
                Ok(Value::String(s.to_uppercase()))
            }
            other => Err(TransformError::Unsupported { kind: kind_of(other) }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn uppercases_after_delay() {
        let transform = ExpensiveUppercase::default();
        let started = Instant::now();

        let out = transform.apply(&json!("alice")).await.expect("string record");

        assert_eq!(out, json!("ALICE"));
        assert!(started.elapsed() >= DEFAULT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn non_string_record_is_unsupported() {
        let transform = ExpensiveUppercase::default();

        let err = transform.apply(&json!({ "id": 1 })).await.unwrap_err();
        assert_eq!(err, TransformError::Unsupported { kind: "object" });

        let err = transform.apply(&json!(7)).await.unwrap_err();
        assert_eq!(err, TransformError::Unsupported { kind: "number" });
    }

    #[tokio::test]
    async fn zero_delay_does_not_wait() {
        let transform = ExpensiveUppercase::new(Duration::ZERO);
        let out = transform.apply(&json!("(42,bob)")).await.expect("string record");
        assert_eq!(out, json!("(42,BOB)"));
    }
}
