//! Command-line entry point: log in if configured, fetch every post, and
//! print a summary.

use std::io;
use std::process::ExitCode;

use bonfire_posts::report::{write_failure, write_report};
use bonfire_posts::{
    AppError, BonfireConfig, FetchObserver, HttpExecutor, Session, StderrJsonlObserver,
    TracingObserver, authenticate, fetch_all_posts,
};
use ortho_config::OrthoConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let config = match load_config() {
        Ok(config) => config,
        Err(error) => return fail(&error, false),
    };
    let authenticated = matches!(config.credentials(), Ok(Some(_)));

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => fail(&error, authenticated),
    }
}

async fn run(config: &BonfireConfig) -> Result<(), AppError> {
    let endpoint = config.endpoint()?;
    let credentials = config.credentials()?;
    let policy = config.pagination_policy()?;
    let timeout = config.request_timeout()?;

    let anonymous = Session::new(endpoint);
    let session = match credentials {
        Some(credentials) => {
            info!(endpoint = %anonymous.endpoint(), "authentication mode: authenticated");
            let login_executor = HttpExecutor::for_session(&anonymous, timeout)?;
            let logged_in = authenticate(&login_executor, &anonymous, &credentials).await?;
            info!("login successful");
            logged_in
        }
        None => {
            info!(endpoint = %anonymous.endpoint(), "authentication mode: unauthenticated");
            anonymous
        }
    };

    let executor = HttpExecutor::for_session(&session, timeout)?;
    let observer: Box<dyn FetchObserver> = if config.events_jsonl {
        Box::new(StderrJsonlObserver)
    } else {
        Box::new(TracingObserver)
    };

    let outcome = fetch_all_posts(&executor, &policy, observer.as_ref()).await;

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &outcome, config.sample_size)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<BonfireConfig, AppError> {
    BonfireConfig::load().map_err(|error| AppError::configuration(error.to_string()))
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn fail(error: &AppError, authenticated: bool) -> ExitCode {
    let mut stderr = io::stderr().lock();
    if write_failure(&mut stderr, error, authenticated).is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::FAILURE
}
