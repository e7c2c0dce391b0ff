//! Function decorators and timers for underbar
//!
//! This crate wraps functions to change how they are invoked (run once,
//! memoize, throttle, delay) and provides the timer service the delayed
//! forms run on.
//!
//! ## Key Components
//!
//! - **`decorators`**: `Once`, `Memoize`, `Throttle` and `delay`
//! - **`timer`**: the `TimerService` trait and its Tokio implementation
//! - **`tracing`**: subscriber setup for applications using the crate

pub mod decorators;
pub mod timer;
pub mod tracing;

pub use decorators::*;
pub use timer::{TimerHandle, TimerService, TokioTimer};
