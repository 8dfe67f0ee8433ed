//! Session bootstrap: endpoint, credentials, and the login exchange.
//!
//! A [`Session`] is immutable. Logging in never touches an existing executor;
//! it yields a new session carrying the bearer token, from which the caller
//! builds a new executor.

mod credentials;
mod error;
mod login;

use std::fmt;

use url::Url;

pub use credentials::Credentials;
pub use error::LoginError;
pub use login::{LOGIN_DOCUMENT, Login, LoginData, LoginPayload, LoginVariables, authenticate, login};

/// Endpoint and optional bearer token used to configure an executor.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    endpoint: Url,
    bearer_token: Option<String>,
}

impl Session {
    /// Creates an unauthenticated session for the endpoint.
    #[must_use]
    pub const fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            bearer_token: None,
        }
    }

    /// Returns a new session for the same endpoint carrying `token`.
    #[must_use]
    pub fn with_bearer_token(&self, token: impl Into<String>) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            bearer_token: Some(token.into()),
        }
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns true when the session carries a bearer token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Returns the `Authorization` header value, if any.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.bearer_token
            .as_deref()
            .map(|token| format!("Bearer {token}"))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("endpoint", &self.endpoint.as_str())
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
