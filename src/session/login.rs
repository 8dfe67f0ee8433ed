//! The `login` mutation and the token exchange built on it.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::graphql::{Document, Operation, RequestExecutor, run_mutation};

use super::Session;
use super::credentials::Credentials;
use super::error::LoginError;

/// Document for the `login` mutation.
pub const LOGIN_DOCUMENT: Document = Document::new(
    "Login",
    r"mutation Login($emailOrUsername: String!, $password: String!) {
  login(emailOrUsername: $emailOrUsername, password: $password) {
    token
  }
}",
);

/// The `login` mutation.
#[derive(Debug, Clone, Copy)]
pub struct Login;

/// Variables for [`Login`].
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginVariables {
    /// Email address or username.
    pub email_or_username: String,
    /// Account password.
    pub password: String,
}

/// Data returned by [`Login`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoginData {
    /// The `login` field; null when the server declines to issue a token.
    #[serde(default)]
    pub login: Option<LoginPayload>,
}

/// Body of the `login` field.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoginPayload {
    /// Bearer token for subsequent requests.
    #[serde(default)]
    pub token: Option<String>,
}

impl Operation for Login {
    type Variables = LoginVariables;
    type Data = LoginData;

    const DOCUMENT: Document = LOGIN_DOCUMENT;
}

/// Exchanges credentials for a bearer token.
///
/// Issues exactly one mutation and never retries.
///
/// # Errors
///
/// Returns [`LoginError::RequestFailed`] when the executor reports an error
/// and [`LoginError::MissingToken`] when the response carries no usable token.
pub async fn login<E>(
    executor: &E,
    email_or_username: &str,
    password: &str,
) -> Result<String, LoginError>
where
    E: RequestExecutor + ?Sized,
{
    let variables = LoginVariables {
        email_or_username: email_or_username.to_owned(),
        password: password.to_owned(),
    };

    let data = run_mutation::<Login, E>(executor, &variables)
        .await
        .map_err(LoginError::RequestFailed)?;

    data.login
        .and_then(|payload| payload.token)
        .filter(|token| !token.is_empty())
        .ok_or(LoginError::MissingToken)
}

/// Logs in with `credentials` and returns an authenticated copy of `session`.
///
/// The executor is only used for the login call; callers build a fresh
/// executor from the returned session.
///
/// # Errors
///
/// Propagates any [`LoginError`] from [`login`].
pub async fn authenticate<E>(
    executor: &E,
    session: &Session,
    credentials: &Credentials,
) -> Result<Session, LoginError>
where
    E: RequestExecutor + ?Sized,
{
    debug!(
        user = credentials.email_or_username(),
        endpoint = %session.endpoint(),
        "logging in"
    );

    match login(executor, credentials.email_or_username(), credentials.password()).await {
        Ok(token) => Ok(session.with_bearer_token(token)),
        Err(error) => {
            warn!("login failed: {error}");
            Err(error)
        }
    }
}
