// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("query must not be empty")]
    EmptyQuery,

    /// The token contains bytes that cannot appear in an HTTP header.
    #[error("token is not a valid header value")]
    InvalidToken,

    /// The HTTP client or request could not be built: bad user agent,
    /// header value or endpoint URL. Nothing was sent.
    #[error("invalid client configuration: {0}")]
    Config(#[source] reqwest::Error),

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx reply. Status and body are kept for the caller.
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("failed to parse response body as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Only produced by [`crate::response::into_data`].
    #[error("GraphQL errors in response: {}", format_messages(.0))]
    Graphql(Vec<Value>),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Error::Config(error)
        } else {
            Error::Transport(error)
        }
    }
}

fn format_messages(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|error| match error.get("message").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => error.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
