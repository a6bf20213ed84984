//! User query builder.
//!
//! The identifier is interpolated into the SQL text verbatim: no escaping,
//! no quoting, no type checking. Callers must make sure the value is safe.

use std::fmt;

use serde_json::Value;

/// Literal that every user query starts with.
pub const USER_QUERY_PREFIX: &str = "SELECT * FROM users WHERE id = ";

/// Textual form of a user identifier as it appears inside a query.
///
/// Strings render as their raw contents, absent values and JSON `null`
/// render as `null`, everything else uses its JSON display form.
#[derive(Debug, Clone, Copy)]
pub struct Identifier<'a>(pub Option<&'a Value>);

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{other}"),
            None => f.write_str("null"),
        }
    }
}

/// Build the query that selects the user with the given identifier.
pub fn user_query(user_id: Option<&Value>) -> String {
    format!("{USER_QUERY_PREFIX}{}", Identifier(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_id_is_interpolated() {
        let id = json!(42);
        assert_eq!(user_query(Some(&id)), "SELECT * FROM users WHERE id = 42");
    }

    #[test]
    fn string_id_is_interpolated_without_quotes() {
        let id = json!("abc-123");
        assert_eq!(user_query(Some(&id)), "SELECT * FROM users WHERE id = abc-123");
    }

    #[test]
    fn absent_and_null_ids_render_as_null() {
        assert_eq!(user_query(None), "SELECT * FROM users WHERE id = null");
        assert_eq!(user_query(Some(&Value::Null)), "SELECT * FROM users WHERE id = null");
    }

    #[test]
    fn hostile_input_is_not_escaped() {
        let id = json!("1; DROP TABLE users; --");
        let query = user_query(Some(&id));
        assert!(query.starts_with(USER_QUERY_PREFIX));
        assert!(query.ends_with("1; DROP TABLE users; --"));
    }

    #[test]
    fn non_scalar_ids_use_json_form() {
        let id = json!([1, 2]);
        assert_eq!(user_query(Some(&id)), "SELECT * FROM users WHERE id = [1,2]");
        let id = json!(true);
        assert_eq!(user_query(Some(&id)), "SELECT * FROM users WHERE id = true");
    }
}
