use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Status lines shown while a plan is being generated.
pub const PROGRESS_MESSAGES: [&str; 5] = [
    "Calculating your macros...",
    "Crafting your personalised meal plan...",
    "Selecting ingredients & portions...",
    "Building your grocery list...",
    "Finalising your 7-day plan...",
];

/// Rotates through status messages on a fixed interval until dropped.
///
/// The first message is emitted immediately on start. Dropping the ticker
/// (or calling [`stop`](Self::stop)) aborts the background task, so a
/// pending request that settles on any path releases the timer.
pub struct ProgressTicker {
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    /// Start ticking on the current tokio runtime.
    pub fn start<F>(period: Duration, messages: &'static [&'static str], mut on_tick: F) -> Self
    where
        F: FnMut(&'static str) + Send + 'static,
    {
        if let Some(&first) = messages.first() {
            on_tick(first);
        }

        let handle = tokio::spawn(async move {
            if messages.len() < 2 {
                return;
            }

            let mut ticks = interval_at(Instant::now() + period, period);
            let mut index = 0;
            loop {
                ticks.tick().await;
                index = (index + 1) % messages.len();
                on_tick(messages[index]);
            }
        });

        Self { handle }
    }

    /// Cancel the rotation.
    pub fn stop(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::trace!("progress ticker stopped");
    }
}
