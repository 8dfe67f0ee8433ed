//! The page loop.

use tokio::time::sleep;
use tracing::debug;

use crate::telemetry::{FetchEvent, FetchObserver};

use super::backoff::backoff_delay;
use super::connection::Connection;
use super::outcome::{Completion, FetchOutcome};
use super::policy::PaginationPolicy;
use super::source::ConnectionSource;

/// A page that could not be fetched within its retry budget.
struct PageFailure {
    attempts: u32,
    error: String,
}

/// Fetches every page of a connection, bounded by `policy`.
///
/// Pages are requested strictly in sequence. Each page after the first is
/// preceded by the policy's inter-page delay. A failing page is retried with
/// exponential backoff on the same cursor; once its retries are spent the run
/// stops and returns what it has. This function never fails.
pub async fn fetch_all<S>(
    source: &S,
    policy: &PaginationPolicy,
    observer: &dyn FetchObserver,
) -> FetchOutcome<S::Node>
where
    S: ConnectionSource + ?Sized,
{
    let max_pages = policy.max_pages().get();
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    for page in 1..=max_pages {
        if page > 1 {
            sleep(policy.inter_page_delay()).await;
        }

        let fetched = fetch_page_with_retry(source, policy, observer, page, cursor.as_deref()).await;
        let maybe_connection = match fetched {
            Ok(maybe_connection) => maybe_connection,
            Err(failure) => {
                debug!(
                    page,
                    attempts = failure.attempts,
                    kept = items.len(),
                    "abandoning page: {}",
                    failure.error
                );
                observer.record(FetchEvent::PageAbandoned {
                    page,
                    attempts: failure.attempts,
                    error: failure.error.clone(),
                    total: items.len(),
                });
                return FetchOutcome {
                    items,
                    completion: Completion::PageFailed {
                        page,
                        attempts: failure.attempts,
                        error: failure.error,
                    },
                    pages_fetched: page.saturating_sub(1),
                };
            }
        };

        let before = items.len();
        let (has_edges, next_cursor) = match maybe_connection {
            Some(connection) => absorb_page(connection, &mut items),
            None => (false, None),
        };

        observer.record(FetchEvent::PageFetched {
            page,
            fetched: items.len().saturating_sub(before),
            total: items.len(),
        });

        if !has_edges {
            observer.record(FetchEvent::NoMoreData {
                page,
                total: items.len(),
            });
            return FetchOutcome {
                items,
                completion: Completion::Exhausted,
                pages_fetched: page,
            };
        }

        if page >= max_pages {
            break;
        }

        match next_cursor {
            Some(next) => cursor = Some(next),
            None => {
                observer.record(FetchEvent::PaginationComplete {
                    pages: page,
                    total: items.len(),
                });
                return FetchOutcome {
                    items,
                    completion: Completion::Exhausted,
                    pages_fetched: page,
                };
            }
        }
    }

    debug!(max_pages, kept = items.len(), "page cap reached");
    observer.record(FetchEvent::CapReached {
        max_pages,
        total: items.len(),
    });
    FetchOutcome {
        items,
        completion: Completion::CapReached { max_pages },
        pages_fetched: max_pages,
    }
}

/// Appends the page's nodes and returns `(had_edges, next_cursor)`.
fn absorb_page<T>(connection: Connection<T>, items: &mut Vec<T>) -> (bool, Option<String>) {
    let has_edges = connection.has_edges();
    let next_cursor = connection.next_cursor().map(ToOwned::to_owned);
    items.extend(connection.into_nodes());
    (has_edges, next_cursor)
}

async fn fetch_page_with_retry<S>(
    source: &S,
    policy: &PaginationPolicy,
    observer: &dyn FetchObserver,
    page: u32,
    cursor: Option<&str>,
) -> Result<Option<Connection<S::Node>>, PageFailure>
where
    S: ConnectionSource + ?Sized,
{
    let max_retries = policy.max_retries_per_page();
    let mut retries = 0_u32;

    loop {
        debug!(page, cursor = cursor.unwrap_or("(initial)"), "fetching page");

        match source
            .fetch_page(policy.page_size().get(), cursor.map(ToOwned::to_owned))
            .await
        {
            Ok(maybe_connection) => return Ok(maybe_connection),
            Err(error) if retries < max_retries => {
                let delay = backoff_delay(policy.retry_base_delay(), retries);
                let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
                retries += 1;
                debug!(
                    page,
                    attempt = retries,
                    max_retries,
                    delay_ms,
                    "retrying page: {error}"
                );
                observer.record(FetchEvent::RetryScheduled {
                    page,
                    attempt: retries,
                    max_retries,
                    delay_ms,
                    error: error.to_string(),
                });
                sleep(delay).await;
            }
            Err(error) => {
                return Err(PageFailure {
                    attempts: retries.saturating_add(1),
                    error: error.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
