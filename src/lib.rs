//! Collkit - Generic collection helpers
//!
//! Traversal, reduction, set algebra and function wrappers over ordinary
//! Rust containers.
//!
//! # Features
//!
//! - **Single traversal primitive**: [`Traverse::each`] drives every helper,
//!   for slices, vectors, hash maps and the runtime-chosen [`Collection`]
//! - **Folding and reshaping**: [`reduce`], [`flatten`], [`sort_by`], [`zip`]
//! - **Set algebra**: [`uniq`], [`intersection`], [`difference`]
//! - **Wrappers**: [`once`], [`memoize`] (thread-safe, at most one real
//!   invocation per cache slot) and [`delay`] on a background [`Scheduler`]
//! - **Compat modes**: [`ReduceMode`], [`MemoPolicy`] and [`ForwardMode`]
//!   select between corrected behavior and the legacy quirks, configurable
//!   through `collkit.toml` ([`CollkitConfig`])
//!
//! # Example
//!
//! ```rust
//! use collkit::{memoize, nested, reduce, zip};
//!
//! let total = reduce(&[1, 2, 3][..], |acc, x| acc + x, Some(0));
//! assert_eq!(total, Some(6));
//!
//! let tree = nested![1, [2, [3, [4, 5]], 6]];
//! assert_eq!(tree.into_flat(), vec![1, 2, 3, 4, 5, 6]);
//!
//! let rows = zip(&[vec![1, 2, 3], vec![4, 5]]);
//! assert_eq!(rows[2], vec![Some(3), None]);
//!
//! let square = memoize(|x: u64| x * x);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.stats().hits, 1);
//! ```

#![warn(clippy::all)]

pub mod collection;
pub mod config;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod wrap;

// Re-export commonly used types
pub use collection::{
    any, any_truthy, contains, each, each_mapping, each_sequence, every, first, last, map, pluck,
    reject, select, uniq, Collection, Key, Record, Taken, ThreeWay, Traverse, Truthy,
};
pub use config::{CollkitConfig, CompatConfig, ConfigError, ConfigResult, SchedulerConfig};
pub use error::{CollError, CollResult};
pub use ops::{
    defaults, difference, extend, flatten, intersection, reduce, reduce_with, shuffle,
    shuffle_with, sort_by, sort_by_key_fn, sort_by_property, zip, zip_pair, Assign, Nested,
    ReduceMode, SortKey,
};
pub use runtime::{delay, ForwardMode, Scheduler, TimerId, TimerQueue, TimerStats};
pub use wrap::{memoize, once, MemoPolicy, MemoStats, Memoize, Once};
