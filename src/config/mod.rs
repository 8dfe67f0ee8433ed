//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with `ortho_config`'s layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.bonfire-posts.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `BONFIRE_GRAPHQL_URI`, `BONFIRE_USERNAME`,
//!    `BONFIRE_PASSWORD`, ...
//! 4. **Command-line arguments** – `--graphql-uri`/`-u`, `--username`,
//!    `--password`, ...
//!
//! # Configuration File
//!
//! ```toml
//! graphql_uri = "https://openscience.network/api/graphql"
//! username = "ada"
//! password = "hunter2"
//! page_size = 10
//! max_pages = 50
//! max_retries = 3
//! inter_page_delay_ms = 500
//! retry_base_delay_ms = 1000
//! request_timeout_seconds = 30
//! sample_size = 5
//! ```

use std::num::NonZeroU32;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AppError;
use crate::pagination::{
    DEFAULT_INTER_PAGE_DELAY, DEFAULT_MAX_PAGES, DEFAULT_MAX_RETRIES_PER_PAGE, DEFAULT_PAGE_SIZE,
    DEFAULT_RETRY_BASE_DELAY, PaginationPolicy,
};
use crate::session::Credentials;

/// Endpoint used when none is configured.
pub const DEFAULT_GRAPHQL_URI: &str = "https://openscience.network/api/graphql";

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use bonfire_posts::BonfireConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = BonfireConfig::load().expect("failed to load configuration");
/// let endpoint = config.endpoint().expect("endpoint should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "BONFIRE",
    discovery(
        dotfile_name = ".bonfire-posts.toml",
        config_file_name = "bonfire-posts.toml",
        app_name = "bonfire-posts"
    )
)]
pub struct BonfireConfig {
    /// GraphQL endpoint to query.
    ///
    /// Can be provided via:
    /// - CLI: `--graphql-uri <URI>` or `-u <URI>`
    /// - Environment: `BONFIRE_GRAPHQL_URI`
    /// - Config file: `graphql_uri = "..."`
    #[ortho_config(cli_short = 'u')]
    pub graphql_uri: String,

    /// Username or email address used to log in.
    ///
    /// Must be set together with `password`; leave both unset to fetch
    /// anonymously.
    #[ortho_config()]
    pub username: Option<String>,

    /// Password used to log in.
    #[ortho_config()]
    pub password: Option<String>,

    /// Posts requested per page. Must be positive.
    #[ortho_config()]
    pub page_size: u32,

    /// Maximum number of pages fetched in one run. Must be positive.
    #[ortho_config()]
    pub max_pages: u32,

    /// Retries allowed for each page before the run is abandoned.
    #[ortho_config()]
    pub max_retries: u32,

    /// Pause between consecutive pages, in milliseconds.
    #[ortho_config()]
    pub inter_page_delay_ms: u64,

    /// Backoff for the first retry, in milliseconds; doubled on each retry.
    #[ortho_config()]
    pub retry_base_delay_ms: u64,

    /// Per-request timeout, in seconds. Must be positive.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Number of posts printed in the summary; all when unset.
    #[ortho_config()]
    pub sample_size: Option<usize>,

    /// Emits progress events as JSON lines on stderr instead of log lines.
    ///
    /// Can be provided via:
    /// - CLI: `--events-jsonl`
    /// - Config file: `events_jsonl = true`
    ///
    /// `ortho_config` does not load boolean values from the environment.
    #[ortho_config()]
    pub events_jsonl: bool,
}

impl Default for BonfireConfig {
    fn default() -> Self {
        Self {
            graphql_uri: DEFAULT_GRAPHQL_URI.to_owned(),
            username: None,
            password: None,
            page_size: DEFAULT_PAGE_SIZE.get(),
            max_pages: DEFAULT_MAX_PAGES.get(),
            max_retries: DEFAULT_MAX_RETRIES_PER_PAGE,
            inter_page_delay_ms: millis(DEFAULT_INTER_PAGE_DELAY),
            retry_base_delay_ms: millis(DEFAULT_RETRY_BASE_DELAY),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            sample_size: None,
            events_jsonl: false,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl BonfireConfig {
    /// Parses the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when the URI is blank, cannot be
    /// parsed, or does not use HTTP(S).
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let raw = self.graphql_uri.trim();
        if raw.is_empty() {
            return Err(AppError::configuration(
                "GraphQL URI is required (use --graphql-uri or -u)",
            ));
        }

        let url = Url::parse(raw)
            .map_err(|error| AppError::configuration(format!("invalid GraphQL URI `{raw}`: {error}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::configuration(format!(
                "GraphQL URI must use http or https, not `{other}`"
            ))),
        }
    }

    /// Returns login credentials when both username and password are set.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when only one of the two is set.
    pub fn credentials(&self) -> Result<Option<Credentials>, AppError> {
        match (non_blank(self.username.as_deref()), non_blank(self.password.as_deref())) {
            (Some(username), Some(password)) => Ok(Some(Credentials::new(username, password))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(AppError::configuration(
                "a password is required when a username is set (use --password)",
            )),
            (None, Some(_)) => Err(AppError::configuration(
                "a username is required when a password is set (use --username)",
            )),
        }
    }

    /// Builds the pagination policy from the configured limits and delays.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when `page_size` or `max_pages`
    /// is zero.
    pub fn pagination_policy(&self) -> Result<PaginationPolicy, AppError> {
        let page_size = NonZeroU32::new(self.page_size)
            .ok_or_else(|| AppError::configuration("page_size must be greater than zero"))?;
        let max_pages = NonZeroU32::new(self.max_pages)
            .ok_or_else(|| AppError::configuration("max_pages must be greater than zero"))?;

        Ok(PaginationPolicy::new(page_size)
            .with_max_pages(max_pages)
            .with_max_retries_per_page(self.max_retries)
            .with_inter_page_delay(Duration::from_millis(self.inter_page_delay_ms))
            .with_retry_base_delay(Duration::from_millis(self.retry_base_delay_ms)))
    }

    /// Returns the per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when the timeout is zero.
    pub fn request_timeout(&self) -> Result<Duration, AppError> {
        if self.request_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "request_timeout_seconds must be greater than zero",
            ));
        }
        Ok(Duration::from_secs(self.request_timeout_seconds))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|candidate| !candidate.trim().is_empty())
}

#[cfg(test)]
mod tests;
