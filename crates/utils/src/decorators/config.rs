//! Configuration for the decorators with tunable behavior.

use std::time::Duration;
use underbar_core::{Error, Result};

/// Default throttle window (100ms)
const DEFAULT_THROTTLE_WAIT: Duration = Duration::from_millis(100);

/// Configuration for [`Throttle`](super::Throttle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Minimum time between two real invocations
    pub wait: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            wait: DEFAULT_THROTTLE_WAIT,
        }
    }
}

impl ThrottleConfig {
    /// Create a config with the given window
    pub fn new(wait: Duration) -> Self {
        Self { wait }
    }

    /// Create a config with a window given in milliseconds
    pub fn from_millis(wait_ms: u64) -> Self {
        Self::new(Duration::from_millis(wait_ms))
    }

    /// Reject windows that would make throttling a no-op
    pub fn validate(&self) -> Result<()> {
        if self.wait.is_zero() {
            return Err(Error::configuration("throttle wait must be greater than zero"));
        }
        Ok(())
    }
}
