//! Function wrappers that own private result caches.

pub mod memoize;
pub mod once;

pub use memoize::{memoize, MemoPolicy, MemoStats, Memoize};
pub use once::{once, Once};
