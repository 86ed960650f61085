//! Single-shot function wrapper.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::error::{CollError, CollResult};

/// Calls the wrapped function at most once; every call returns that result.
///
/// The first call's arguments are forwarded to the function; the legacy
/// wrapper invoked it with none. Arguments passed after the first call are
/// ignored. Concurrent first callers block until the single invocation
/// finishes. If that invocation panics the wrapper is spent and later calls
/// return [`CollError::WrapperSpent`].
pub struct Once<F, R> {
    func: Mutex<Option<F>>,
    result: OnceCell<R>,
}

impl<F, R> Once<F, R> {
    pub fn new(func: F) -> Self {
        Self {
            func: Mutex::new(Some(func)),
            result: OnceCell::new(),
        }
    }

    /// Invoke (first call) or replay the cached result.
    pub fn call<A>(&self, args: A) -> CollResult<R>
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        self.result
            .get_or_try_init(|| {
                let func = self.func.lock().take().ok_or(CollError::WrapperSpent)?;
                tracing::debug!("once: running wrapped function");
                Ok::<R, CollError>(func(args))
            })
            .cloned()
    }

    /// The cached result, if the function has completed.
    pub fn get(&self) -> Option<&R> {
        self.result.get()
    }

    pub fn has_run(&self) -> bool {
        self.result.get().is_some()
    }

    pub fn into_inner(self) -> Option<R> {
        self.result.into_inner()
    }
}

impl<F, R: std::fmt::Debug> std::fmt::Debug for Once<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Once")
            .field("result", &self.result.get())
            .finish()
    }
}

/// Wrap `func` so it runs at most once.
pub fn once<F, A, R>(func: F) -> Once<F, R>
where
    F: FnOnce(A) -> R,
{
    Once::new(func)
}
