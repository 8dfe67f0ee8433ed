//! Scripted page sources and recording observers for tests.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::graphql::ExecError;
use crate::telemetry::{FetchEvent, FetchObserver};

use super::connection::{Connection, Edge, PageInfo};
use super::source::ConnectionSource;

/// One scripted response.
pub type ScriptedPage<T> = Result<Option<Connection<T>>, ExecError>;

/// A request observed by [`ScriptedSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page size.
    pub first: u32,
    /// Requested cursor.
    pub after: Option<String>,
}

/// Page source that replays a fixed list of responses in order.
///
/// Requests beyond the end of the script fail with a network error.
#[derive(Debug)]
pub struct ScriptedSource<T> {
    script: Mutex<VecDeque<ScriptedPage<T>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl<T> ScriptedSource<T> {
    /// Creates a source that replays `script`.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = ScriptedPage<T>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the requests made so far.
    #[must_use]
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns how many requests were made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl<T: Send> ConnectionSource for ScriptedSource<T> {
    type Node = T;

    async fn fetch_page(
        &self,
        first: u32,
        after: Option<String>,
    ) -> Result<Option<Connection<T>>, ExecError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(PageRequest { first, after });

        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Err(ExecError::Network {
                    message: "script exhausted".to_owned(),
                })
            })
    }
}

/// Builds a connection page from nodes, with a trailing cursor when `next`
/// is set.
#[must_use]
pub fn page<T>(nodes: Vec<Option<T>>, next: Option<&str>) -> Connection<T> {
    let edges = nodes
        .into_iter()
        .map(|node| Some(Edge::new(None, node)))
        .collect();
    Connection::new(
        Some(edges),
        PageInfo::new(next.is_some(), next.map(ToOwned::to_owned)),
    )
}

/// Observer that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<FetchEvent>>,
}

impl RecordingObserver {
    /// Drains and returns the recorded events.
    #[must_use]
    pub fn take(&self) -> Vec<FetchEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl FetchObserver for RecordingObserver {
    fn record(&self, event: FetchEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
