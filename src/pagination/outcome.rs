//! Result of a pagination run.

use serde::Serialize;

/// Why a pagination run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Completion {
    /// The server reported no further pages.
    Exhausted,
    /// The page cap was reached before the server ran out of pages.
    CapReached {
        /// The cap that was hit.
        max_pages: u32,
    },
    /// A page kept failing and was abandoned.
    PageFailed {
        /// The abandoned page (1-based).
        page: u32,
        /// Attempts made on that page, including the first.
        attempts: u32,
        /// Message of the last failure.
        error: String,
    },
}

impl Completion {
    /// Returns true when the run stopped before the connection was exhausted.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        !matches!(self, Self::Exhausted)
    }
}

/// Nodes accumulated by a pagination run and how the run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome<T> {
    /// Nodes in page order, then edge order.
    pub items: Vec<T>,
    /// Why the run stopped.
    pub completion: Completion,
    /// Pages fetched successfully.
    pub pages_fetched: u32,
}

impl<T> FetchOutcome<T> {
    /// Returns true when `items` is known to be incomplete.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        self.completion.is_partial()
    }

    /// Splits the outcome into the `(items, partial)` pair.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, bool) {
        let partial = self.is_partial();
        (self.items, partial)
    }
}
