//! `db` crate — pure persistence layer.
//!
//! Provides the user query builder, the [`DataSource`] collaborator trait,
//! a Postgres-backed source and an in-memory source for tests.
//! No business logic lives here.

pub mod error;
pub mod pool;
pub mod query;
pub mod source;
pub mod memory;

pub use pool::DbPool;
pub use error::DbError;
pub use query::{user_query, Identifier, USER_QUERY_PREFIX};
pub use source::{DataSource, PgDataSource};
pub use memory::MemorySource;
