//! Progress events emitted while paginating, and sinks that record them.
//!
//! The page loop never writes to the console itself. It reports what happens
//! to a [`FetchObserver`], so the CLI can log progress while tests record
//! events and assert on them.

use std::io;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A structured progress event from a pagination run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FetchEvent {
    /// A page was fetched successfully.
    PageFetched {
        /// Page number (1-based).
        page: u32,
        /// Nodes contributed by this page.
        fetched: usize,
        /// Nodes accumulated so far.
        total: usize,
    },
    /// A page failed and will be retried after a delay.
    RetryScheduled {
        /// Page number (1-based).
        page: u32,
        /// Retry number about to be made (1-based).
        attempt: u32,
        /// Retries allowed for the page.
        max_retries: u32,
        /// Backoff before the retry, in milliseconds.
        delay_ms: u64,
        /// Message of the failure being retried.
        error: String,
    },
    /// A page exhausted its retries and the run stopped.
    PageAbandoned {
        /// Page number (1-based).
        page: u32,
        /// Attempts made, including the first.
        attempts: u32,
        /// Message of the last failure.
        error: String,
        /// Nodes kept from earlier pages.
        total: usize,
    },
    /// The page cap stopped the run.
    CapReached {
        /// The cap that was hit.
        max_pages: u32,
        /// Nodes accumulated.
        total: usize,
    },
    /// A page came back without edges, ending the run.
    NoMoreData {
        /// Page number (1-based).
        page: u32,
        /// Nodes accumulated.
        total: usize,
    },
    /// The server reported no further pages.
    PaginationComplete {
        /// Pages fetched.
        pages: u32,
        /// Nodes accumulated.
        total: usize,
    },
}

/// A sink that can record fetch events.
pub trait FetchObserver: Send + Sync {
    /// Records a fetch event.
    fn record(&self, event: FetchEvent);
}

/// Observer that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {
    fn record(&self, _event: FetchEvent) {}
}

/// Forwards events to `tracing` as human-readable progress lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn record(&self, event: FetchEvent) {
        match event {
            FetchEvent::PageFetched {
                page,
                fetched,
                total,
            } => info!("page {page}: fetched {fetched} posts (total: {total})"),
            FetchEvent::RetryScheduled {
                page,
                attempt,
                max_retries,
                delay_ms,
                error,
            } => warn!(
                "retrying page {page} (attempt {attempt}/{max_retries}) after {delay_ms}ms: {error}"
            ),
            FetchEvent::PageAbandoned {
                page,
                attempts,
                error,
                total,
            } => warn!(
                "failed to fetch page {page} after {attempts} attempts ({error}); \
                 returning {total} posts fetched before the error"
            ),
            FetchEvent::CapReached { max_pages, total } => {
                warn!("reached maximum page limit ({max_pages}); stopping with {total} posts");
            }
            FetchEvent::NoMoreData { page, total } => {
                info!("page {page}: no more posts available (total: {total})");
            }
            FetchEvent::PaginationComplete { pages, total } => {
                info!("pagination complete after {pages} pages (total: {total})");
            }
        }
    }
}

/// Records events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlObserver;

impl FetchObserver for StderrJsonlObserver {
    fn record(&self, event: FetchEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{FetchEvent, FetchObserver, NoopObserver, TracingObserver};
    use crate::pagination::test_support::RecordingObserver;

    #[test]
    fn recording_observer_captures_events() {
        let observer = RecordingObserver::default();
        observer.record(FetchEvent::CapReached {
            max_pages: 50,
            total: 500,
        });

        assert_eq!(
            observer.take(),
            vec![FetchEvent::CapReached {
                max_pages: 50,
                total: 500,
            }]
        );
        assert!(observer.take().is_empty(), "take should drain the buffer");
    }

    #[test]
    fn events_serialise_with_snake_case_type_tag() {
        let event = FetchEvent::RetryScheduled {
            page: 2,
            attempt: 1,
            max_retries: 3,
            delay_ms: 1_000,
            error: "boom".to_owned(),
        };

        assert_eq!(
            serde_json::to_value(&event).expect("event should serialise"),
            json!({
                "type": "retry_scheduled",
                "page": 2,
                "attempt": 1,
                "max_retries": 3,
                "delay_ms": 1000,
                "error": "boom"
            })
        );
    }

    #[test]
    fn noop_and_tracing_observers_accept_every_event() {
        let events = [
            FetchEvent::PageFetched {
                page: 1,
                fetched: 2,
                total: 2,
            },
            FetchEvent::NoMoreData { page: 2, total: 2 },
            FetchEvent::PaginationComplete { pages: 1, total: 2 },
        ];

        for event in events {
            NoopObserver.record(event.clone());
            TracingObserver.record(event);
        }
    }
}
