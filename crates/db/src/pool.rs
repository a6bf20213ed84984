//! Postgres connection pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Type alias for the Postgres pool behind `PgDataSource`.
pub type DbPool = PgPool;

/// Pool ceiling used when the caller has no preference.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect to `database_url` with at most `max_connections` open connections.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    info!(max_connections, "connecting to user database");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect(database_url)
        .await?;
    Ok(pool)
}
