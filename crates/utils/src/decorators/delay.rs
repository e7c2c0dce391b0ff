//! Delayed invocation

use crate::timer::{TimerHandle, TimerService, TokioTimer};
use std::time::Duration;
use tracing::debug;
use underbar_core::Result;

/// Call `func(args)` once, no earlier than `wait` from now.
///
/// Returns immediately; the call happens on the timer service. The
/// returned handle can cancel the call before it happens.
pub fn delay<T, F, A>(timer: &T, wait: Duration, func: F, args: A) -> TimerHandle
where
    T: TimerService + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    debug!(?wait, "delaying call");
    timer.schedule(wait, Box::new(move || func(args)))
}

/// [`delay`] on the Tokio runtime the caller is running in.
///
/// Fails with `Error::NoRuntime` outside a runtime.
pub fn delay_current<F, A>(wait: Duration, func: F, args: A) -> Result<TimerHandle>
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    let timer = TokioTimer::current()?;
    Ok(delay(&timer, wait, func, args))
}
