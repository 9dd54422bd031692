//! Shutdown signal shared by the Ctrl-C handler and the scheduler.
//!
//! The flag is what playback polls between points; the [`Notify`] is what a
//! waiting scheduler is woken by.  `notify_one` stores a permit, so a trigger
//! that lands before anyone waits is not lost.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

#[derive(Debug, Default)]
pub struct ShutdownSignal {
    triggered: AtomicBool,
    notify: Notify,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests shutdown.  Idempotent.
    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
        self.notify.notify_one();
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Completes once shutdown has been requested.
    pub async fn triggered(&self) {
        while !self.is_triggered() {
            self.notify.notified().await;
        }
    }
}
