//! reqwest-backed request executor.

use std::time::Duration;

use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::session::Session;

use super::error::{ExecError, truncate_for_message};
use super::executor::RequestExecutor;
use super::operation::{Document, GraphqlRequest, GraphqlResponse};

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ERROR_BODY_MAX_CHARS: usize = 160;

/// Executes GraphQL operations over HTTP POST.
///
/// An executor is bound to one [`Session`] for its whole lifetime. Switching
/// credentials means building a new executor from a new session.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpExecutor {
    /// Builds an executor for the session's endpoint and credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Client`] when the bearer token is not a valid
    /// header value or the HTTP client cannot be constructed.
    pub fn for_session(session: &Session, timeout: Duration) -> Result<Self, ExecError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(authorization) = session.authorization_header() {
            let mut value =
                HeaderValue::from_str(&authorization).map_err(|error| ExecError::Client {
                    message: format!("invalid authorization header: {error}"),
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|error| ExecError::Client {
                message: error.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: session.endpoint().clone(),
        })
    }

    /// Returns the endpoint requests are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn execute(&self, document: &Document, variables: Value) -> Result<Value, ExecError> {
        let operation = document.operation_name();
        debug!(operation, endpoint = %self.endpoint, "sending GraphQL request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&GraphqlRequest::new(document, &variables))
            .send()
            .await
            .map_err(|error| ExecError::Network {
                message: format!("{operation} request failed: {error}"),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| ExecError::Network {
            message: format!("{operation} response could not be read: {error}"),
        })?;

        if !status.is_success() {
            // Servers commonly pair 4xx statuses with a GraphQL error document.
            if let Ok(envelope) = serde_json::from_str::<GraphqlResponse>(&body)
                && envelope.has_errors()
            {
                return envelope.into_data();
            }
            return Err(ExecError::HttpStatus {
                status,
                body: truncate_for_message(&body, ERROR_BODY_MAX_CHARS),
            });
        }

        let envelope: GraphqlResponse =
            serde_json::from_str(&body).map_err(|error| ExecError::Decode {
                message: format!("{operation} response is not a GraphQL document: {error}"),
            })?;

        envelope.into_data()
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn query(&self, document: &Document, variables: Value) -> Result<Value, ExecError> {
        self.execute(document, variables).await
    }

    async fn mutate(&self, document: &Document, variables: Value) -> Result<Value, ExecError> {
        self.execute(document, variables).await
    }
}

#[cfg(test)]
#[path = "http_executor_tests.rs"]
mod tests;
