//! Exponential backoff delays.

use std::time::Duration;

/// Returns the delay before retry number `retries + 1`: `base * 2^retries`.
///
/// The multiplication saturates instead of overflowing.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use bonfire_posts::pagination::backoff_delay;
///
/// let base = Duration::from_secs(1);
/// assert_eq!(backoff_delay(base, 0), Duration::from_secs(1));
/// assert_eq!(backoff_delay(base, 2), Duration::from_secs(4));
/// ```
#[must_use]
pub const fn backoff_delay(base: Duration, retries: u32) -> Duration {
    match 2_u32.checked_pow(retries) {
        Some(factor) => base.saturating_mul(factor),
        None if base.is_zero() => Duration::ZERO,
        None => Duration::MAX,
    }
}
