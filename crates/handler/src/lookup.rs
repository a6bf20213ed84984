//! Request handling.
//!
//! `RequestHandler` runs the whole lookup in a straight line:
//! 1. Reads `user_id` from the request (absent is passed through as-is).
//! 2. Builds the user query via `db::user_query`.
//! 3. Executes it through the configured `DataSource`.
//! 4. Applies the `RecordTransform` to each record, one at a time, and
//!    discards the outputs.
//! 5. Returns exactly the records the data source produced.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use db::DataSource;
use records::{ExpensiveUppercase, RecordTransform};

use crate::{HandlerError, Request};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning knobs for the handler's default transform.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Pause applied by the default transform before each record.
    pub transform_delay: Duration,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            transform_delay: records::uppercase::DEFAULT_DELAY,
        }
    }
}

// ---------------------------------------------------------------------------
// RequestHandler
// ---------------------------------------------------------------------------

/// Stateless handler that serves one request per `handle` call.
pub struct RequestHandler {
    source: Arc<dyn DataSource>,
    transform: Arc<dyn RecordTransform>,
}

impl RequestHandler {
    /// Create a handler from explicit collaborators.
    pub fn new(source: Arc<dyn DataSource>, transform: Arc<dyn RecordTransform>) -> Self {
        Self { source, transform }
    }

    /// Create a handler that uses `ExpensiveUppercase` with the configured delay.
    pub fn with_config(source: Arc<dyn DataSource>, config: &HandlerConfig) -> Self {
        Self::new(source, Arc::new(ExpensiveUppercase::new(config.transform_delay)))
    }

    /// Look up the requested user's records.
    ///
    /// # Errors
    /// Returns `HandlerError` when the data source or the transform fails.
    /// A missing `user_id` is not an error.
    #[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn handle(&self, request: &Request) -> Result<Vec<Value>, HandlerError> {
        let user_id = request.user_id();
        if user_id.is_none() {
            warn!("request has no user_id");
        }

        let query = db::user_query(user_id);
        debug!(%query, "built user query");

        let rows = self.source.execute(&query).await?;
        info!("data source returned {} records", rows.len());

        for (index, row) in rows.iter().enumerate() {
            let _ = self.transform.apply(row).await?;
            debug!(index, "record transformed");
        }

        Ok(rows)
    }
}
