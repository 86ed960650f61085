//! Higher-level operations: folding, flattening, sorting, zipping, set
//! algebra, record merging and shuffling.

pub mod flatten;
pub mod objects;
pub mod reduce;
pub mod sets;
pub mod shuffle;
pub mod sort;
pub mod zip;

pub use flatten::{flatten, Nested};
pub use objects::{defaults, extend, Assign};
pub use reduce::{reduce, reduce_with, ReduceMode};
pub use sets::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with};
pub use sort::{sort_by, sort_by_key_fn, sort_by_property, SortKey};
pub use zip::{zip, zip_pair};
