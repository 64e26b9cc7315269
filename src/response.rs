// SPDX-License-Identifier: Apache-2.0

//! Opt-in helpers for looking at a raw GraphQL response. The request
//! functions never apply these; a populated `errors` field is returned to
//! the caller like any other response.

use crate::error::{Error, Result};
use serde_json::Value;

/// The top-level `errors` array, if present and non-empty.
pub fn graphql_errors(response: &Value) -> Option<&[Value]> {
    match response.get("errors") {
        Some(Value::Array(errors)) if !errors.is_empty() => Some(errors),
        _ => None,
    }
}

/// Strict view of a response: the `data` member when the server reported no
/// errors, [`Error::Graphql`] otherwise. A response without `data` or
/// `errors` yields `Value::Null`.
pub fn into_data(mut response: Value) -> Result<Value> {
    if graphql_errors(&response).is_some() {
        let errors = match response.get_mut("errors").map(Value::take) {
            Some(Value::Array(errors)) => errors,
            _ => Vec::new(),
        };
        return Err(Error::Graphql(errors));
    }

    Ok(response
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_graphql_errors() {
        let response = json!({"errors": [{"message": "bad query"}]});
        assert_eq!(
            Some(&[json!({"message": "bad query"})][..]),
            graphql_errors(&response)
        );

        assert_eq!(None, graphql_errors(&json!({"data": {"ok": true}})));
        assert_eq!(None, graphql_errors(&json!({"data": null, "errors": []})));
    }

    #[test]
    fn test_into_data() {
        let data = into_data(json!({"data": {"viewer": {"login": "octocat"}}})).unwrap();
        assert_eq!(json!({"viewer": {"login": "octocat"}}), data);

        assert_eq!(Value::Null, into_data(json!({})).unwrap());
    }

    #[test]
    fn test_into_data_with_errors() {
        let response = json!({
            "data": {"viewer": null},
            "errors": [{"message": "bad query"}]
        });
        match into_data(response) {
            Err(Error::Graphql(errors)) => {
                assert_eq!(vec![json!({"message": "bad query"})], errors)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
