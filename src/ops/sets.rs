//! Set-style operations over sequences.
//!
//! The first sequence drives the result: its order and duplicates are kept,
//! and membership in the others is tested with `==`.

use crate::collection::contains;

/// Elements of the first sequence present in every other sequence.
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    retain_first(sequences, |value, others| {
        others.iter().all(|other| contains(other.as_ref(), value))
    })
}

/// Elements of the first sequence present in none of the others.
pub fn difference<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    retain_first(sequences, |value, others| {
        !others.iter().any(|other| contains(other.as_ref(), value))
    })
}

fn retain_first<T, S, P>(sequences: &[S], keep: P) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    P: Fn(&T, &[S]) -> bool,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    head.as_ref()
        .iter()
        .filter(|&value| keep(value, rest))
        .cloned()
        .collect()
}
