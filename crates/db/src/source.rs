//! The `DataSource` trait — the execute-style collaborator the handler
//! hands its queries to.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::{DbError, DbPool};

/// Executes a raw query string and returns the resulting records.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Run `query` and return one record per row, in result order.
    async fn execute(&self, query: &str) -> Result<Vec<Value>, DbError>;
}

/// Postgres-backed data source.
///
/// Every row is returned as its Postgres text rendering (e.g. `(42,alice)`),
/// so each record is a JSON string.
#[derive(Debug, Clone)]
pub struct PgDataSource {
    pool: DbPool,
}

impl PgDataSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataSource for PgDataSource {
    async fn execute(&self, query: &str) -> Result<Vec<Value>, DbError> {
        let wrapped = format!("SELECT t::text FROM ({query}) AS t");
        debug!(query = %wrapped, "executing query");

        let rows = sqlx::query_scalar::<_, String>(&wrapped)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Value::String).collect())
    }
}
