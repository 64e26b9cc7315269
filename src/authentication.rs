// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};
use reqwest::header::HeaderValue;

/// Credentials attached to a single request.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    #[default]
    Anonymous,
    Bearer(String),
}

impl Credentials {
    /// An absent or empty token means the request goes out unauthenticated.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Credentials::Bearer(token.to_string()),
            _ => Credentials::Anonymous,
        }
    }

    pub fn authorization_header(&self) -> Result<Option<HeaderValue>> {
        match self {
            Credentials::Anonymous => Ok(None),
            Credentials::Bearer(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| Error::InvalidToken)?;
                value.set_sensitive(true);
                Ok(Some(value))
            }
        }
    }
}

// Tokens must never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Anonymous => f.write_str("Anonymous"),
            Credentials::Bearer(_) => f.write_str("Bearer(<redacted>)"),
        }
    }
}
