//! `MemorySource` — an in-process test double for `DataSource`.
//!
//! Useful in unit tests where a live Postgres instance is either unavailable
//! or irrelevant.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::{DataSource, DbError};

/// Behaviour injected into `MemorySource` at construction time.
pub enum MemoryBehaviour {
    /// Return these records for every query.
    Rows(Vec<Value>),
    /// Fail every query with `DbError::Source`.
    Fail(String),
}

/// A data source that records every query it receives and answers with a
/// programmer-specified result.
pub struct MemorySource {
    pub behaviour: MemoryBehaviour,
    /// All queries seen by this source (in call order).
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl MemorySource {
    /// Create a source that always returns the given records.
    pub fn returning(rows: Vec<Value>) -> Self {
        Self {
            behaviour: MemoryBehaviour::Rows(rows),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a source that always fails.
    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            behaviour: MemoryBehaviour::Fail(msg.into()),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the queries executed so far.
    pub fn executed(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn execute(&self, query: &str) -> Result<Vec<Value>, DbError> {
        self.queries.lock().unwrap().push(query.to_owned());

        match &self.behaviour {
            MemoryBehaviour::Rows(rows) => Ok(rows.clone()),
            MemoryBehaviour::Fail(msg) => Err(DbError::Source(msg.clone())),
        }
    }
}
