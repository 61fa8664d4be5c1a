//! In-flight request guard
//!
//! Requests are not aborted when a screen goes away; the guard instead makes
//! the eventual resolution a no-op so a late response never fires into a
//! detached view. Screens keep one guard per mounted view and cancel it on
//! teardown.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    cancelled: Arc<AtomicBool>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the guard cancelled. Any resolution observed through [`run`]
    /// after this point is dropped.
    ///
    /// [`run`]: RequestGuard::run
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        tracing::debug!("Cancelled in-flight request guard");
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Drive a request to completion, returning `None` if the guard was
    /// cancelled before or while the request was in flight.
    pub async fn run<F, T>(&self, request: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        if self.is_cancelled() {
            return None;
        }

        let outcome = request.await;

        if self.is_cancelled() {
            None
        } else {
            Some(outcome)
        }
    }
}
