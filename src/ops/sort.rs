//! Sorting by an extracted key or a named property.
//!
//! Sorting never mutates the input: the result is a fresh vector. The
//! underlying `slice::sort_by` is stable, so elements with equal keys keep
//! their input order.

use std::cmp::Ordering;

use crate::collection::{Record, ThreeWay};

/// What to sort by: a property name or a key function.
///
/// Property names (`&str`, `String`) read fields through [`Record`]; records
/// lacking the field sort first. Any `Fn(&T) -> K` with `K: ThreeWay` is a
/// key function and places no requirement on `T` beyond `Clone`.
pub trait SortKey<T> {
    fn sorted(&self, items: &[T]) -> Vec<T>;
}

impl<T> SortKey<T> for &str
where
    T: Record + Clone,
    T::Field: ThreeWay,
{
    fn sorted(&self, items: &[T]) -> Vec<T> {
        sort_by_property(items, self)
    }
}

impl<T> SortKey<T> for String
where
    T: Record + Clone,
    T::Field: ThreeWay,
{
    fn sorted(&self, items: &[T]) -> Vec<T> {
        sort_by_property(items, self)
    }
}

impl<T, K, F> SortKey<T> for F
where
    T: Clone,
    K: ThreeWay,
    F: Fn(&T) -> K,
{
    fn sorted(&self, items: &[T]) -> Vec<T> {
        sort_by_key_fn(items, self)
    }
}

/// Sort ascending by `key`, a property name or a key function.
///
/// ```
/// use collkit::sort_by;
/// use serde_json::json;
///
/// let rows = vec![json!({"n": 3}), json!({"n": 1})];
/// assert_eq!(sort_by(&rows, "n")[0], json!({"n": 1}));
///
/// let words = vec!["pear", "fig"];
/// assert_eq!(sort_by(&words, |w: &&str| w.len()), vec!["fig", "pear"]);
/// ```
pub fn sort_by<T, S>(items: &[T], key: S) -> Vec<T>
where
    S: SortKey<T>,
{
    key.sorted(items)
}

/// Sort ascending by the key `f` extracts.
pub fn sort_by_key_fn<T, K, F>(items: &[T], f: F) -> Vec<T>
where
    T: Clone,
    K: ThreeWay,
    F: Fn(&T) -> K,
{
    let mut out = items.to_vec();
    out.sort_by(|left, right| f(left).three_way(&f(right)));
    out
}

/// Sort records ascending by a named field.
pub fn sort_by_property<T>(items: &[T], property: &str) -> Vec<T>
where
    T: Record + Clone,
    T::Field: ThreeWay,
{
    let mut out = items.to_vec();
    out.sort_by(|left, right| compare_fields(left.field(property), right.field(property)));
    out
}

fn compare_fields<V: ThreeWay>(left: Option<&V>, right: Option<&V>) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => a.three_way(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}
