//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique IDs in tests.
///
/// Starts well above zero since Discord snowflakes are non-zero.
static COUNTER: AtomicU64 = AtomicU64::new(10_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
