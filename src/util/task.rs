//! Cancellable simulated-latency tasks for submit handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms fake an API round-trip with a fixed delay. The component that starts
//! the task cancels its token in `on_cleanup`, so a task that finishes after
//! teardown returns `SubmitError::Cancelled` instead of writing to disposed
//! signals.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission cancelled")]
    Cancelled,
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Wait for `delay` on the browser timer. Resolves immediately off-browser.
pub async fn sleep(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}

/// Simulate a round-trip: wait `delay`, then run `complete` unless `token`
/// was cancelled in the meantime.
///
/// # Errors
///
/// Returns `SubmitError::Cancelled` when the token is cancelled before or
/// during the delay, otherwise whatever `complete` returns.
pub async fn simulate_round_trip<T, F>(token: &CancelToken, delay: Duration, complete: F) -> Result<T, SubmitError>
where
    F: FnOnce() -> Result<T, SubmitError>,
{
    complete_after(token, sleep(delay), complete).await
}

/// Await `wait`, then run `complete` unless `token` was cancelled before or
/// while waiting.
///
/// # Errors
///
/// Returns `SubmitError::Cancelled` when the token is cancelled, otherwise
/// whatever `complete` returns.
pub async fn complete_after<T, W, F>(token: &CancelToken, wait: W, complete: F) -> Result<T, SubmitError>
where
    W: Future<Output = ()>,
    F: FnOnce() -> Result<T, SubmitError>,
{
    if token.is_cancelled() {
        return Err(SubmitError::Cancelled);
    }
    wait.await;
    if token.is_cancelled() {
        return Err(SubmitError::Cancelled);
    }
    complete()
}
