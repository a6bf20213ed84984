//! `handler` crate — turns a request into a user lookup.
//!
//! Looks up `user_id`, builds the query, hands it to a [`db::DataSource`],
//! applies a [`records::RecordTransform`] to every returned record and
//! returns the records unchanged.

pub mod request;
pub mod error;
pub mod lookup;

pub use request::Request;
pub use error::HandlerError;
pub use lookup::{HandlerConfig, RequestHandler};
