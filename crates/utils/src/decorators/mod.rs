//! Function decorators
//!
//! Each decorator wraps a function in a small struct that owns the state
//! the altered invocation behavior needs, and exposes a `call` method.
//! State is per instance: two decorators built from the same function
//! never share it.
//!
//! - [`Once`] - runs the function once and replays its result
//! - [`Memoize`] - caches results by serialized arguments
//! - [`Throttle`] - runs the function at most once per time window
//! - [`delay`] - schedules a single call on a [`TimerService`](crate::timer::TimerService)
//!
//! Multiple arguments are passed as a tuple.

pub mod config;
pub mod delay;
pub mod memoize;
pub mod once;
pub mod throttle;

pub use config::ThrottleConfig;
pub use delay::{delay, delay_current};
pub use memoize::{memoize, Memoize};
pub use once::{once, Once};
pub use throttle::{throttle, Throttle};
