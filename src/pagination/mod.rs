//! Cursor pagination with bounded retry.
//!
//! [`fetch_all`] walks a Relay-style connection page by page, accumulating
//! nodes until the server reports no further pages, the page cap is reached,
//! or a page keeps failing after its retries are spent. Failures never escape:
//! the caller always gets the nodes collected so far, tagged with a
//! [`Completion`] saying whether the walk finished.

mod backoff;
mod connection;
mod fetch;
mod outcome;
mod policy;
mod source;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use backoff::backoff_delay;
pub use connection::{Connection, Edge, PageInfo};
pub use fetch::fetch_all;
pub use outcome::{Completion, FetchOutcome};
pub use policy::{
    DEFAULT_INTER_PAGE_DELAY, DEFAULT_MAX_PAGES, DEFAULT_MAX_RETRIES_PER_PAGE, DEFAULT_PAGE_SIZE,
    DEFAULT_RETRY_BASE_DELAY, PaginationPolicy,
};
pub use source::ConnectionSource;
