//! Timer service used by the time-based decorators
//!
//! A [`TimerService`] can run a callback once after a delay or repeatedly
//! at a fixed interval. [`TokioTimer`] implements it on a Tokio runtime.
//! Every scheduled callback is represented by a [`TimerHandle`] that can
//! cancel it; dropping the handle leaves the timer running.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};
use underbar_core::{Error, Result};

/// Shortest interval accepted by [`TimerService::repeat`]
pub const MIN_REPEAT_INTERVAL: Duration = Duration::from_millis(1);

/// Stand-in deadline for waits too long to represent as an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// One-shot callback run by [`TimerService::schedule`]
pub type OneShot = Box<dyn FnOnce() + Send + 'static>;

/// Recurring callback run by [`TimerService::repeat`]
pub type Recurring = Box<dyn FnMut() + Send + 'static>;

/// Schedules callbacks in the future.
pub trait TimerService {
    /// Run `callback` once, no earlier than `delay` from now
    fn schedule(&self, delay: Duration, callback: OneShot) -> TimerHandle;

    /// Run `callback` every `interval`, starting one interval from now,
    /// until the returned handle is cancelled or the runtime shuts down
    fn repeat(&self, interval: Duration, callback: Recurring) -> TimerHandle;
}

/// A scheduled timer
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    /// Stop the timer. A one-shot callback that already ran is unaffected.
    pub fn cancel(&self) {
        trace!("cancelling timer");
        self.task.abort();
    }

    /// Whether the timer will never fire again
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// [`TimerService`] backed by a Tokio runtime
#[derive(Debug, Clone)]
pub struct TokioTimer {
    handle: Handle,
}

impl TokioTimer {
    /// Create a timer that spawns onto the given runtime
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Create a timer on the runtime the caller is running in
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| Error::no_runtime("timer"))
    }
}

impl TimerService for TokioTimer {
    fn schedule(&self, delay: Duration, callback: OneShot) -> TimerHandle {
        let deadline = deadline_after(delay);
        debug!(?delay, "scheduling one-shot timer");

        let task = self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            trace!("one-shot timer fired");
            callback();
        });

        TimerHandle::new(task)
    }

    fn repeat(&self, interval: Duration, mut callback: Recurring) -> TimerHandle {
        let interval = interval.max(MIN_REPEAT_INTERVAL);
        let start = deadline_after(interval);
        debug!(?interval, "scheduling recurring timer");

        let task = self.handle.spawn(async move {
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                callback();
            }
        });

        TimerHandle::new(task)
    }
}

/// `delay` from now, saturating at [`FAR_FUTURE`]
fn deadline_after(delay: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(delay).unwrap_or_else(|| now + FAR_FUTURE)
}
