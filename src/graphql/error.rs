//! Error types surfaced by GraphQL request execution.

use http::StatusCode;
use thiserror::Error;

/// Errors raised while executing a GraphQL operation.
///
/// Callers treat every variant as "the request failed"; the variants exist so
/// that diagnostics can say why.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("network error talking to the GraphQL endpoint: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("GraphQL endpoint returned status {status}: {body}")]
    HttpStatus {
        /// HTTP status returned by the endpoint.
        status: StatusCode,
        /// Response body, truncated for display.
        body: String,
    },

    /// The response carried a non-empty `errors` list.
    #[error("GraphQL error: {}", .messages.join("; "))]
    Graphql {
        /// Messages from each reported GraphQL error.
        messages: Vec<String>,
    },

    /// The response carried neither errors nor data.
    #[error("GraphQL response contained no data")]
    NoData,

    /// Variables could not be encoded as JSON.
    #[error("failed to encode GraphQL variables: {message}")]
    Encode {
        /// Serialiser error detail.
        message: String,
    },

    /// The response did not match the expected shape.
    #[error("failed to decode GraphQL response: {message}")]
    Decode {
        /// Deserialiser error detail.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to configure GraphQL client: {message}")]
    Client {
        /// Builder error detail.
        message: String,
    },
}

/// Shortens `message` to at most `max_chars` characters, appending `...` when
/// anything was cut.
pub(crate) fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}
