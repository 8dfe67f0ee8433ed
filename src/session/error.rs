//! Errors raised by the login exchange.

use thiserror::Error;

use crate::graphql::ExecError;

/// Failure modes of [`super::login`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    /// The response was well formed but carried no token.
    #[error("login response missing token")]
    MissingToken,

    /// The login mutation itself failed.
    #[error("login request failed: {0}")]
    RequestFailed(#[source] ExecError),
}
