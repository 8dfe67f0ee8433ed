//! Username/password pair used for the login exchange.

use std::fmt;

/// Login credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email_or_username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from an email address or username and a password.
    #[must_use]
    pub fn new(email_or_username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email_or_username: email_or_username.into(),
            password: password.into(),
        }
    }

    /// Returns the email address or username.
    #[must_use]
    pub fn email_or_username(&self) -> &str {
        &self.email_or_username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email_or_username", &self.email_or_username)
            .field("password", &"<redacted>")
            .finish()
    }
}
