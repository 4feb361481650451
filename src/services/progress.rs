//! Remap progress reporting.
//!
//! The pixel loop runs on a blocking thread and publishes its counter into a
//! `watch` channel. A task on the runtime turns the latest value into a
//! percentage and logs it whenever the percentage changes. Dropping the
//! sink closes the channel, which ends the task.

use perceptual_match::ProgressSink;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};

/// Publishes processed-pixel counts to a [`ProgressReporter`].
///
/// Only counts that land on a new percentage step are sent, so the channel
/// sees at most about a hundred updates per image.
#[derive(Debug)]
pub struct WatchProgress {
    sender: watch::Sender<usize>,
    step: usize,
    total: usize,
}

impl ProgressSink for WatchProgress {
    fn advance(&self, processed: usize) {
        if processed % self.step == 0 || processed == self.total {
            self.sender.send_replace(processed);
        }
    }
}

/// Handle to the logging task started by [`start`].
#[derive(Debug)]
pub struct ProgressReporter {
    task: JoinHandle<usize>,
}

impl ProgressReporter {
    /// Wait for the task to drain the channel.
    ///
    /// Resolves once the matching [`WatchProgress`] has been dropped and
    /// returns the last percentage that was logged.
    pub async fn finish(self) -> Result<usize, JoinError> {
        self.task.await
    }

    /// Stop the task without waiting for the sink to drop, then join it.
    pub async fn cancel(self) {
        self.task.abort();
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                tracing::warn!(%e, "Progress task failed");
            }
        }
    }
}

/// Whole percent of `total` covered by `done`. An empty job is complete.
pub fn percent(done: usize, total: usize) -> usize {
    if total == 0 {
        100
    } else {
        done.min(total) * 100 / total
    }
}

/// Start a reporter for a job of `total` pixels.
///
/// Must be called from within a Tokio runtime.
pub fn start(total: usize) -> (WatchProgress, ProgressReporter) {
    let (sender, mut receiver) = watch::channel(0usize);
    let sink = WatchProgress {
        sender,
        step: (total / 100).max(1),
        total,
    };

    let task = tokio::spawn(async move {
        let mut last = None;
        while receiver.changed().await.is_ok() {
            let done = *receiver.borrow_and_update();
            let pct = percent(done, total);
            if last != Some(pct) {
                tracing::info!(percent = pct, done, total, "Remapping");
                last = Some(pct);
            }
        }
        last.unwrap_or(0)
    });

    (sink, ProgressReporter { task })
}
