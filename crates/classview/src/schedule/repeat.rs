//! Press-and-hold auto-repeat for spinner controls.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Delay between the press and the first automatic repeat.
pub const INITIAL_DELAY: Duration = Duration::from_millis(300);

/// Interval between subsequent automatic repeats.
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(100);

/// A cancelable repeating step task for one spinner control.
///
/// At most one repeat task is live per control: `press` cancels any stale
/// task before spawning the next, and `release` aborts whatever is pending.
/// Releasing an already-idle handle is a no-op.
#[derive(Debug, Default)]
pub struct RepeatHandle {
    task: Option<JoinHandle<()>>,
}

impl RepeatHandle {
    pub fn new() -> Self {
        Self { task: None }
    }

    /// Runs `step` once immediately, then again after [`INITIAL_DELAY`] and
    /// every [`REPEAT_INTERVAL`] thereafter until [`Self::release`].
    pub fn press<F>(&mut self, mut step: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.release();
        step();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(INITIAL_DELAY).await;
            loop {
                step();
                tokio::time::sleep(REPEAT_INTERVAL).await;
            }
        }));
    }

    /// Cancels pending repeats so no queued step fires after release.
    pub fn release(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// True while a press is being repeated.
    pub fn is_pressed(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for RepeatHandle {
    fn drop(&mut self) {
        self.release();
    }
}
