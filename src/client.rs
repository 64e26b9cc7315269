// SPDX-License-Identifier: Apache-2.0

use crate::{
    authentication::Credentials,
    config::ClientConfig,
    error::{Error, Result},
};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
struct QueryBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

/// Sends GraphQL documents to a single endpoint.
///
/// Every call is one POST with no retries. Responses are returned as raw
/// JSON, `errors` included; see [`crate::response`] for stricter views.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: reqwest::Client,
    endpoint: String,
    accept: String,
}

impl GraphqlClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint,
            accept: config.accept,
        })
    }

    /// Uses a caller-provided HTTP client, e.g. one with its own timeouts or
    /// proxy settings. The client's default headers (user agent included)
    /// are left as they are.
    pub fn with_http_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            accept: crate::config::DEFAULT_ACCEPT.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn request(&self, query: &str, token: Option<&str>) -> Result<Value> {
        self.request_with_variables(query, None, token).await
    }

    #[instrument(
        skip(self, query, variables, token),
        fields(
            endpoint = %self.endpoint
        ),
    )]
    pub async fn request_with_variables(
        &self,
        query: &str,
        variables: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value> {
        if query.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }

        let credentials = Credentials::from_token(token);
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, self.accept.as_str())
            .json(&QueryBody { query, variables });
        if let Some(authorization) = credentials.authorization_header()? {
            request = request.header(AUTHORIZATION, authorization);
        }

        debug!(?credentials, "Sending GraphQL request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Sends `query` to the default GitHub endpoint. `token`, when present, is
/// sent as a bearer credential.
pub async fn request(query: &str, token: Option<&str>) -> Result<Value> {
    GraphqlClient::new(ClientConfig::default())?
        .request(query, token)
        .await
}
