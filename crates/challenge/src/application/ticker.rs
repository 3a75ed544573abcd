//! Cancellable Countdown Ticker Handle
//!
//! Owns the `JoinHandle` of the spawned countdown task. Installing a
//! replacement always aborts the predecessor first, so at most one ticker
//! is ever live; dropping the handle aborts whatever is still running.

use std::sync::Mutex;

use tokio::task::JoinHandle;

/// Holder for the single countdown task
#[derive(Debug, Default)]
pub struct TickerHandle {
    inner: Mutex<Option<JoinHandle<()>>>,
}

impl TickerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new ticker task, aborting any predecessor
    pub fn replace(&self, handle: JoinHandle<()>) {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = guard.replace(handle) {
            previous.abort();
        }
    }

    /// Abort the running ticker, if any
    pub fn stop(&self) {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = guard.take() {
            handle.abort();
        }
    }

    /// Whether a ticker task is currently installed and unfinished
    pub fn is_running(&self) -> bool {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
