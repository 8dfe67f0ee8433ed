//! Errors surfaced to the command-line entry point.

use thiserror::Error;

use crate::graphql::ExecError;
use crate::session::LoginError;

/// Failures that stop a run before any posts are reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Exchanging credentials for a token failed.
    #[error(transparent)]
    Login(#[from] LoginError),

    /// The GraphQL client could not be built.
    #[error(transparent)]
    Client(#[from] ExecError),

    /// Writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl AppError {
    /// Builds an [`AppError::Configuration`] from a message.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
