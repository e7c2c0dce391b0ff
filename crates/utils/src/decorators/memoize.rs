//! Memoizing decorator

use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use tracing::trace;
use underbar_core::{Error, Result};

/// Wraps a function with a cache keyed by its serialized arguments.
///
/// Arguments are serialized to JSON; two argument values share a cache
/// entry exactly when their JSON text is identical. That holds for
/// primitives and tuples of primitives but not in general, e.g. maps with
/// unordered keys. Pass multiple arguments as a tuple.
///
/// The store is never evicted except by [`Memoize::clear`].
///
/// The lookup and the insert take the lock separately, so threads that miss
/// on the same arguments at the same time each run the function; the last
/// result stored wins.
pub struct Memoize<F, R> {
    func: F,
    store: Mutex<HashMap<String, R>>,
}

impl<F, R> Memoize<F, R> {
    /// Wrap `func`
    pub fn new<A>(func: F) -> Self
    where
        F: Fn(A) -> R,
    {
        Self {
            func,
            store: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached result for `args`, computing it on a miss.
    ///
    /// The store is unlocked while the wrapped function runs.
    pub fn call<A>(&self, args: A) -> Result<R>
    where
        A: Serialize,
        F: Fn(A) -> R,
        R: Clone,
    {
        let key =
            serde_json::to_string(&args).map_err(|e| Error::serialization("memoize", e))?;

        let cached = self.store.lock().get(&key).cloned();
        if let Some(result) = cached {
            trace!(key = %key, "memoize cache hit");
            return Ok(result);
        }

        trace!(key = %key, "memoize cache miss");
        let result = (self.func)(args);
        self.store.lock().insert(key, result.clone());
        Ok(result)
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Drop every cached result
    pub fn clear(&self) {
        self.store.lock().clear();
    }
}

/// Shorthand for [`Memoize::new`]
pub fn memoize<A, F, R>(func: F) -> Memoize<F, R>
where
    F: Fn(A) -> R,
{
    Memoize::new(func)
}
