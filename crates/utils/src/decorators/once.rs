//! Run-once decorator

use once_cell::sync::OnceCell;
use tracing::debug;

/// Wraps a function so that it runs at most once.
///
/// The first call runs the function with its arguments; every call,
/// including the first, returns a clone of that single result. Arguments
/// passed to later calls are ignored.
///
/// The function must not call its own `Once` wrapper.
pub struct Once<F, R> {
    func: F,
    result: OnceCell<R>,
}

impl<F, R> Once<F, R> {
    /// Wrap `func`
    pub fn new<A>(func: F) -> Self
    where
        F: Fn(A) -> R,
    {
        Self {
            func,
            result: OnceCell::new(),
        }
    }

    /// Call the wrapped function, or return the result of the call that
    /// already happened
    pub fn call<A>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
        R: Clone,
    {
        self.result
            .get_or_init(|| {
                debug!("running once-wrapped function");
                (self.func)(args)
            })
            .clone()
    }

    /// Whether the wrapped function has run
    pub fn has_run(&self) -> bool {
        self.result.get().is_some()
    }

    /// The stored result, if the function has run
    pub fn result(&self) -> Option<&R> {
        self.result.get()
    }
}

/// Shorthand for [`Once::new`]
pub fn once<A, F, R>(func: F) -> Once<F, R>
where
    F: Fn(A) -> R,
{
    Once::new(func)
}
