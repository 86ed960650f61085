//! Result caching keyed by argument.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::collection::Truthy;

/// Cache strategy for [`Memoize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoPolicy {
    /// One cache entry per distinct argument.
    #[default]
    PerArgument,
    /// Legacy behavior: a single slot filled by the first non-null result,
    /// which is then returned for every argument. Falsy results such as `0`
    /// or `""` are cached; only nullish ones ([`Truthy::is_nullish`]) are not.
    FirstNonNull,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Total cache lookups
    pub lookups: u64,
    /// Cache hits
    pub hits: u64,
    /// Cache misses (calls into the wrapped function)
    pub misses: u64,
    /// Number of cached results
    pub entries: usize,
}

impl MemoStats {
    /// Get hit rate as percentage
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            (self.hits as f64 / self.lookups as f64) * 100.0
        }
    }
}

/// Memoizing wrapper around `F: Fn(A) -> R`.
///
/// With [`MemoPolicy::PerArgument`] each distinct argument runs the function
/// at most once, even when several threads ask for it at the same time.
pub struct Memoize<F, A, R> {
    func: F,
    policy: MemoPolicy,
    is_null: fn(&R) -> bool,
    slots: Mutex<HashMap<A, Arc<OnceCell<R>>>>,
    first: Mutex<Option<R>>,
    lookups: AtomicU64,
    hits: AtomicU64,
}

impl<F, A, R> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    /// Per-argument memoization.
    pub fn new(func: F) -> Self {
        Self::build(func, MemoPolicy::PerArgument, |_| false)
    }

    /// Memoization under an explicit policy.
    pub fn with_policy(func: F, policy: MemoPolicy) -> Self
    where
        R: Truthy,
    {
        Self::build(func, policy, <R as Truthy>::is_nullish)
    }

    fn build(func: F, policy: MemoPolicy, is_null: fn(&R) -> bool) -> Self {
        Self {
            func,
            policy,
            is_null,
            slots: Mutex::new(HashMap::new()),
            first: Mutex::new(None),
            lookups: AtomicU64::new(0),
            hits: AtomicU64::new(0),
        }
    }

    pub fn policy(&self) -> MemoPolicy {
        self.policy
    }

    pub fn call(&self, arg: A) -> R {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        match self.policy {
            MemoPolicy::PerArgument => self.call_per_argument(arg),
            MemoPolicy::FirstNonNull => self.call_first_non_null(arg),
        }
    }

    fn call_per_argument(&self, arg: A) -> R {
        let cell = {
            let mut slots = self.slots.lock();
            Arc::clone(slots.entry(arg.clone()).or_default())
        };

        let mut computed = false;
        let result = cell
            .get_or_init(|| {
                computed = true;
                tracing::trace!("memoize: cache miss");
                (self.func)(arg)
            })
            .clone();

        if !computed {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    // The slot stays locked while computing, so concurrent callers queue.
    fn call_first_non_null(&self, arg: A) -> R {
        let mut slot = self.first.lock();
        if let Some(cached) = slot.as_ref() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached.clone();
        }

        tracing::trace!("memoize: slot empty, calling wrapped function");
        let result = (self.func)(arg);
        if !(self.is_null)(&result) {
            *slot = Some(result.clone());
        }
        result
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        match self.policy {
            MemoPolicy::PerArgument => self
                .slots
                .lock()
                .values()
                .filter(|cell| cell.get().is_some())
                .count(),
            MemoPolicy::FirstNonNull => usize::from(self.first.lock().is_some()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached result. Statistics are kept.
    pub fn clear(&self) {
        self.slots.lock().clear();
        self.first.lock().take();
    }

    pub fn stats(&self) -> MemoStats {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let hits = self.hits.load(Ordering::Relaxed);
        MemoStats {
            lookups,
            hits,
            misses: lookups.saturating_sub(hits),
            entries: self.len(),
        }
    }
}

/// Per-argument memoization of `func`.
pub fn memoize<F, A, R>(func: F) -> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    Memoize::new(func)
}
