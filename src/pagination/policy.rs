//! Bounds and delays governing a pagination run.

use std::num::NonZeroU32;
use std::time::Duration;

/// Default number of nodes requested per page.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);
/// Default page cap.
pub const DEFAULT_MAX_PAGES: NonZeroU32 = NonZeroU32::MIN.saturating_add(49);
/// Default number of retries allowed for a single page.
pub const DEFAULT_MAX_RETRIES_PER_PAGE: u32 = 3;
/// Default courtesy delay before requesting each page after the first.
pub const DEFAULT_INTER_PAGE_DELAY: Duration = Duration::from_millis(500);
/// Default delay before the first retry; doubled for each further retry.
pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(1_000);

/// Pagination bounds.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use std::time::Duration;
/// use bonfire_posts::pagination::PaginationPolicy;
///
/// let policy = PaginationPolicy::default()
///     .with_max_pages(NonZeroU32::MIN)
///     .with_inter_page_delay(Duration::ZERO);
/// assert_eq!(policy.max_pages().get(), 1);
/// assert_eq!(policy.max_retries_per_page(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPolicy {
    page_size: NonZeroU32,
    max_pages: NonZeroU32,
    max_retries_per_page: u32,
    inter_page_delay: Duration,
    retry_base_delay: Duration,
}

impl PaginationPolicy {
    /// Creates a policy with the given page size and default bounds.
    #[must_use]
    pub const fn new(page_size: NonZeroU32) -> Self {
        Self {
            page_size,
            max_pages: DEFAULT_MAX_PAGES,
            max_retries_per_page: DEFAULT_MAX_RETRIES_PER_PAGE,
            inter_page_delay: DEFAULT_INTER_PAGE_DELAY,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: NonZeroU32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the page cap.
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: NonZeroU32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Sets the number of retries allowed per page.
    #[must_use]
    pub const fn with_max_retries_per_page(mut self, max_retries_per_page: u32) -> Self {
        self.max_retries_per_page = max_retries_per_page;
        self
    }

    /// Sets the courtesy delay between pages.
    #[must_use]
    pub const fn with_inter_page_delay(mut self, inter_page_delay: Duration) -> Self {
        self.inter_page_delay = inter_page_delay;
        self
    }

    /// Sets the base backoff delay.
    #[must_use]
    pub const fn with_retry_base_delay(mut self, retry_base_delay: Duration) -> Self {
        self.retry_base_delay = retry_base_delay;
        self
    }

    /// Returns the number of nodes requested per page.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    /// Returns the page cap.
    #[must_use]
    pub const fn max_pages(&self) -> NonZeroU32 {
        self.max_pages
    }

    /// Returns the number of retries allowed per page.
    #[must_use]
    pub const fn max_retries_per_page(&self) -> u32 {
        self.max_retries_per_page
    }

    /// Returns the courtesy delay between pages.
    #[must_use]
    pub const fn inter_page_delay(&self) -> Duration {
        self.inter_page_delay
    }

    /// Returns the base backoff delay.
    #[must_use]
    pub const fn retry_base_delay(&self) -> Duration {
        self.retry_base_delay
    }
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
