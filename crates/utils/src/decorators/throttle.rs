//! Rate-limiting decorator

use super::config::ThrottleConfig;
use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;
use underbar_core::Result;

/// Wraps a function so that it really runs at most once per window.
///
/// A call runs the function only if it never ran before or if at least
/// `wait` has passed since the last time it actually ran. Calls inside the
/// window are dropped and return `None`; they are not queued.
///
/// Time is read from `tokio::time::Instant`, so a paused Tokio clock
/// controls the window in tests.
pub struct Throttle<F> {
    func: F,
    config: ThrottleConfig,
    last_invocation: Mutex<Option<Instant>>,
}

impl<F> Throttle<F> {
    /// Wrap `func` with the given configuration
    pub fn new(func: F, config: ThrottleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            func,
            config,
            last_invocation: Mutex::new(None),
        })
    }

    /// Run the wrapped function with `args` if the window is open
    pub fn call<A, R>(&self, args: A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        let now = Instant::now();
        {
            let mut last = self.last_invocation.lock();
            if let Some(previous) = *last {
                if now.duration_since(previous) < self.config.wait {
                    trace!("throttled call dropped");
                    return None;
                }
            }
            *last = Some(now);
        }

        trace!("throttled call passed");
        Some((self.func)(args))
    }

    /// Time left until the next call would run; zero when the window is open
    pub fn remaining(&self) -> Duration {
        match *self.last_invocation.lock() {
            Some(previous) => self.config.wait.saturating_sub(previous.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Reopen the window immediately
    pub fn reset(&self) {
        *self.last_invocation.lock() = None;
    }

    /// The active configuration
    pub fn config(&self) -> &ThrottleConfig {
        &self.config
    }
}

/// Shorthand for [`Throttle::new`] with a window of `wait`
pub fn throttle<A, F, R>(func: F, wait: Duration) -> Result<Throttle<F>>
where
    F: Fn(A) -> R,
{
    Throttle::new(func, ThrottleConfig::new(wait))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::advance;
    use underbar_core::Error;

    #[tokio::test(start_paused = true)]
    async fn test_first_call_passes_then_window_blocks() {
        let calls = AtomicUsize::new(0);
        let throttled = throttle(
            |n: u32| {
                calls.fetch_add(1, Ordering::SeqCst);
                n * 2
            },
            Duration::from_millis(100),
        )
        .unwrap();

        assert_eq!(throttled.call(1), Some(2));
        assert_eq!(throttled.call(2), None);

        advance(Duration::from_millis(50)).await;
        assert_eq!(throttled.call(3), None);
        assert_eq!(throttled.remaining(), Duration::from_millis(50));

        advance(Duration::from_millis(50)).await;
        assert_eq!(throttled.call(4), Some(8));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_measured_from_last_real_invocation() {
        let throttled = throttle(|_: ()| (), Duration::from_millis(100)).unwrap();

        assert!(throttled.call(()).is_some());
        advance(Duration::from_millis(90)).await;
        assert!(throttled.call(()).is_none());

        // a dropped call does not restart the window
        advance(Duration::from_millis(10)).await;
        assert!(throttled.call(()).is_some());

        advance(Duration::from_millis(99)).await;
        assert!(throttled.call(()).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_reopens_window() {
        let throttled = throttle(|s: &str| s.len(), Duration::from_secs(1)).unwrap();

        assert_eq!(throttled.call("abc"), Some(3));
        assert_eq!(throttled.call("abcd"), None);
        throttled.reset();
        assert_eq!(throttled.remaining(), Duration::ZERO);
        assert_eq!(throttled.call("abcd"), Some(4));
    }

    #[test]
    fn test_zero_wait_rejected() {
        let result = throttle(|n: u8| n, Duration::ZERO);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_instances_are_independent() {
        let wait = Duration::from_secs(60);
        let first = throttle(|n: u8| n, wait).unwrap();
        let second = throttle(|n: u8| n, wait).unwrap();

        assert_eq!(first.call(1), Some(1));
        assert_eq!(second.call(2), Some(2));
        assert_eq!(first.call(3), None);
        assert_eq!(first.config().wait, wait);
    }
}
