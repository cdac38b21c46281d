//! Per-call context passed from the host to every handler operation.

use std::future::Future;
use std::time::Duration;

use tokio::time::{error::Elapsed, Instant};

/// Call context carrying the host's deadline, if any.
///
/// Handlers forward the deadline into the remote call; they never extend it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    deadline: Option<Instant>,
}

impl Context {
    /// Context without a deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// Context whose deadline is `timeout` from now.
    ///
    /// A timeout too large to represent as an instant leaves the context without a deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => Self::with_deadline(deadline),
            None => Self::background(),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Runs `future` to completion or until the deadline elapses.
    ///
    /// # Returns
    /// - `Ok(F::Output)` - The future completed in time (or there is no deadline)
    /// - `Err(Elapsed)` - The deadline passed first; the future is dropped
    pub async fn bound<F: Future>(&self, future: F) -> Result<F::Output, Elapsed> {
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, future).await,
            None => Ok(future.await),
        }
    }
}
