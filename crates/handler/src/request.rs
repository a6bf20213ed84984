//! The request mapping handed to the handler.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key the handler reads the user identifier from.
pub const USER_ID_KEY: &str = "user_id";

/// A mapping from string keys to JSON values.
///
/// Serialises as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Request(HashMap<String, Value>);

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `user_id` entry, if present.
    pub fn user_id(&self) -> Option<&Value> {
        self.get(USER_ID_KEY)
    }
}
