//! # Search Debouncer
//!
//! Coalesces rapid search keystrokes into a single refresh: a fetch
//! fires only after the input has been quiescent for the configured
//! delay. Later keystrokes supersede earlier ones; in-flight requests
//! are never cancelled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Generation-counter debouncer.
pub struct SearchDebouncer {
    generation: AtomicU64,
    delay: Duration,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            generation: AtomicU64::new(0),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the quiescence window. Returns `true` only for the
    /// newest caller: any call made while we slept supersedes this one.
    pub async fn quiesce(&self) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        self.generation.load(Ordering::SeqCst) == generation
    }
}
