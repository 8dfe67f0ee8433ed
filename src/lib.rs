//! Paginated post retrieval from Bonfire GraphQL endpoints.
//!
//! The library logs in with optional credentials, walks the Relay-style
//! `posts` connection page by page with bounded retries, and renders a
//! summary of what was fetched. Transport failures during pagination are
//! absorbed: callers always receive the posts gathered so far together with
//! a [`Completion`] describing how the run ended.

pub mod config;
pub mod error;
pub mod graphql;
pub mod pagination;
pub mod posts;
pub mod report;
pub mod session;
pub mod telemetry;

pub use config::BonfireConfig;
pub use error::AppError;
pub use graphql::{ExecError, HttpExecutor, RequestExecutor};
pub use pagination::{Completion, FetchOutcome, PaginationPolicy};
pub use posts::{Post, PostContent, fetch_all_posts};
pub use session::{Credentials, LoginError, Session, authenticate, login};
pub use telemetry::{FetchEvent, FetchObserver, NoopObserver, StderrJsonlObserver, TracingObserver};
