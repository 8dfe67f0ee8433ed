//! Operation documents and the GraphQL-over-HTTP wire payloads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ExecError;

/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    operation_name: &'static str,
    text: &'static str,
}

impl Document {
    /// Creates a document from its operation name and source text.
    #[must_use]
    pub const fn new(operation_name: &'static str, text: &'static str) -> Self {
        Self {
            operation_name,
            text,
        }
    }

    /// Returns the operation name sent as `operationName`.
    #[must_use]
    pub const fn operation_name(&self) -> &'static str {
        self.operation_name
    }

    /// Returns the GraphQL source text.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        self.text
    }
}

/// A typed GraphQL operation.
///
/// Implementors pair a [`Document`] with the Rust types its variables and
/// `data` member map onto.
pub trait Operation {
    /// Variables sent alongside the document.
    type Variables: Serialize + Send + Sync;
    /// Shape of the `data` member of a successful response.
    type Data: DeserializeOwned;

    /// The operation document.
    const DOCUMENT: Document;
}

/// Request body posted to the endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphqlRequest<'a> {
    query: &'static str,
    variables: &'a Value,
    operation_name: &'static str,
}

impl<'a> GraphqlRequest<'a> {
    pub(crate) const fn new(document: &Document, variables: &'a Value) -> Self {
        Self {
            query: document.text(),
            variables,
            operation_name: document.operation_name(),
        }
    }
}

/// Response envelope returned by the endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    #[serde(default)]
    message: String,
}

impl GraphqlResponse {
    /// Returns true when the envelope lists at least one error.
    pub(crate) const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Applies the mixed success/error policy: any reported error fails the
    /// whole response, even when partial data accompanies it.
    pub(crate) fn into_data(self) -> Result<Value, ExecError> {
        if self.has_errors() {
            return Err(ExecError::Graphql {
                messages: self
                    .errors
                    .into_iter()
                    .map(|entry| entry.message)
                    .collect(),
            });
        }

        self.data
            .filter(|data| !data.is_null())
            .ok_or(ExecError::NoData)
    }
}
