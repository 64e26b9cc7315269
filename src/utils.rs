// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::Path;

pub fn read_query<P: AsRef<Path>>(query_path: P) -> Result<String> {
    let query_path = query_path.as_ref();
    std::fs::read_to_string(query_path)
        .with_context(|| format!("Failed to read query from {:?}", query_path))
}

pub fn parse_variables(variables: &str) -> Result<Value> {
    let value: Value =
        serde_json::from_str(variables).context("Failed to parse variables as JSON")?;
    if !value.is_object() {
        return Err(anyhow!("Variables must be a JSON object, got: {value}"));
    }
    Ok(value)
}

/// Reads the token from `var_name`. Unset, empty or non-unicode values all
/// mean "no token".
pub fn token_from_env(var_name: &str) -> Option<String> {
    std::env::var(var_name).ok().filter(|token| !token.is_empty())
}
