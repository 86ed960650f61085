//! Traversal and element helpers.
//!
//! [`Traverse::each`] is the only iteration primitive. Every helper in this
//! module (and [`crate::ops::reduce`]) is written against it, so anything
//! that implements [`Traverse`] gets the whole helper set.

pub mod record;
pub mod truthy;

use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::hash::BuildHasher;

pub use record::{Record, ThreeWay};
pub use truthy::Truthy;

// =============================================================================
// Keys and containers
// =============================================================================

/// Position of an element handed to a visitor.
#[derive(Debug, PartialEq, Eq)]
pub enum Key<'a, K: ?Sized> {
    /// Offset into a sequence
    Index(usize),
    /// Key of a mapping entry
    Named(&'a K),
}

impl<K: ?Sized> Clone for Key<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for Key<'_, K> {}

impl<K: ?Sized> Key<'_, K> {
    pub fn index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Named(_) => None,
        }
    }
}

/// Either a sequence or a mapping, chosen at runtime.
#[derive(Debug)]
pub enum Collection<'a, K, V, S = std::collections::hash_map::RandomState> {
    Sequence(&'a [V]),
    Mapping(&'a HashMap<K, V, S>),
}

impl<K, V, S> Clone for Collection<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for Collection<'_, K, V, S> {}

impl<K, V, S> Collection<'_, K, V, S> {
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, K, V, S> From<&'a HashMap<K, V, S>> for Collection<'a, K, V, S> {
    fn from(map: &'a HashMap<K, V, S>) -> Self {
        Collection::Mapping(map)
    }
}

impl<'a, K, V> Collection<'a, K, V> {
    pub fn sequence(items: &'a [V]) -> Self {
        Collection::Sequence(items)
    }
}

// =============================================================================
// Traversal primitive
// =============================================================================

/// Visit every element of a container exactly once.
///
/// Sequences are visited in order; mappings in unspecified key order.
pub trait Traverse {
    type Item;
    type Key: ?Sized;

    fn each<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Item, Key<'_, Self::Key>, &Self);
}

impl<T> Traverse for [T] {
    type Item = T;
    type Key = Infallible;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, Key<'_, Infallible>, &Self),
    {
        for (i, item) in self.iter().enumerate() {
            visitor(item, Key::Index(i), self);
        }
    }
}

impl<T> Traverse for Vec<T> {
    type Item = T;
    type Key = Infallible;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, Key<'_, Infallible>, &Self),
    {
        for (i, item) in self.iter().enumerate() {
            visitor(item, Key::Index(i), self);
        }
    }
}

impl<K, V, S: BuildHasher> Traverse for HashMap<K, V, S> {
    type Item = V;
    type Key = K;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&V, Key<'_, K>, &Self),
    {
        for (key, value) in self {
            visitor(value, Key::Named(key), self);
        }
    }
}

impl<K, V> Traverse for BTreeMap<K, V> {
    type Item = V;
    type Key = K;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&V, Key<'_, K>, &Self),
    {
        for (key, value) in self {
            visitor(value, Key::Named(key), self);
        }
    }
}

impl<K, V, S> Traverse for Collection<'_, K, V, S> {
    type Item = V;
    type Key = K;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&V, Key<'_, K>, &Self),
    {
        match *self {
            Collection::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    visitor(item, Key::Index(i), self);
                }
            }
            Collection::Mapping(map) => {
                for (key, value) in map.iter() {
                    visitor(value, Key::Named(key), self);
                }
            }
        }
    }
}

/// Call `visitor(element, key, container)` once per element.
pub fn each<C, F>(container: &C, visitor: F)
where
    C: Traverse + ?Sized,
    F: FnMut(&C::Item, Key<'_, C::Key>, &C),
{
    container.each(visitor);
}

/// Sequence-only entry point: `visitor(element, index)`.
pub fn each_sequence<T, F>(items: &[T], mut visitor: F)
where
    F: FnMut(&T, usize),
{
    items.each(|item, key, _| {
        if let Key::Index(i) = key {
            visitor(item, i);
        }
    });
}

/// Mapping-only entry point: `visitor(value, key)`.
pub fn each_mapping<K, V, S, F>(map: &HashMap<K, V, S>, mut visitor: F)
where
    S: BuildHasher,
    F: FnMut(&V, &K),
{
    map.each(|value, key, _| {
        if let Key::Named(k) = key {
            visitor(value, k);
        }
    });
}

// =============================================================================
// Element helpers
// =============================================================================

/// True when any element equals `target`.
pub fn contains<C>(container: &C, target: &C::Item) -> bool
where
    C: Traverse + ?Sized,
    C::Item: PartialEq,
{
    let mut found = false;
    container.each(|value, _, _| {
        if value == target {
            found = true;
        }
    });
    found
}

/// Apply `f` to every element, collecting results in traversal order.
pub fn map<C, R, F>(container: &C, mut f: F) -> Vec<R>
where
    C: Traverse + ?Sized,
    F: FnMut(&C::Item) -> R,
{
    let mut out = Vec::new();
    container.each(|value, _, _| out.push(f(value)));
    out
}

/// Read one named field from every record. Missing fields yield `None`.
pub fn pluck<C>(container: &C, property: &str) -> Vec<Option<<C::Item as Record>::Field>>
where
    C: Traverse + ?Sized,
    C::Item: Record,
    <C::Item as Record>::Field: Clone,
{
    map(container, |record| record.field(property).cloned())
}

/// Elements passing `predicate`.
pub fn select<C, P>(container: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Traverse + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut out = Vec::new();
    container.each(|value, _, _| {
        if predicate(value) {
            out.push(value.clone());
        }
    });
    out
}

/// Elements failing `predicate`.
pub fn reject<C, P>(container: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Traverse + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    select(container, |value| !predicate(value))
}

/// True when every element passes. Vacuously true for empty containers.
pub fn every<C, P>(container: &C, mut predicate: P) -> bool
where
    C: Traverse + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut all = true;
    container.each(|value, _, _| {
        if !predicate(value) {
            all = false;
        }
    });
    all
}

/// True when at least one element passes.
pub fn any<C, P>(container: &C, mut predicate: P) -> bool
where
    C: Traverse + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut found = false;
    container.each(|value, _, _| {
        if predicate(value) {
            found = true;
        }
    });
    found
}

/// `any` without a predicate: true when some element is truthy.
pub fn any_truthy<C>(container: &C) -> bool
where
    C: Traverse + ?Sized,
    C::Item: Truthy,
{
    any(container, |value| value.is_truthy())
}

/// First occurrence of each distinct value, in order.
///
/// Only `PartialEq` is required, so this is quadratic in the output size.
pub fn uniq<C>(container: &C) -> Vec<C::Item>
where
    C: Traverse + ?Sized,
    C::Item: PartialEq + Clone,
{
    let mut out: Vec<C::Item> = Vec::new();
    container.each(|value, _, _| {
        if !contains(out.as_slice(), value) {
            out.push(value.clone());
        }
    });
    out
}

// =============================================================================
// first / last
// =============================================================================

/// Result of [`first`] and [`last`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Taken<T> {
    /// No count requested: the single boundary element, if any
    One(Option<T>),
    /// A count was requested
    Many(Vec<T>),
}

/// Leading elements of a sequence.
///
/// `None` input yields `None`. With `n = None` the first element is
/// returned; with `n` larger than the sequence the whole sequence is.
pub fn first<T: Clone>(items: Option<&[T]>, n: Option<usize>) -> Option<Taken<T>> {
    let items = items?;
    Some(match n {
        None => Taken::One(items.first().cloned()),
        Some(n) => Taken::Many(items[..n.min(items.len())].to_vec()),
    })
}

/// Trailing elements of a sequence. Mirrors [`first`].
pub fn last<T: Clone>(items: Option<&[T]>, n: Option<usize>) -> Option<Taken<T>> {
    let items = items?;
    Some(match n {
        None => Taken::One(items.last().cloned()),
        Some(n) => Taken::Many(items[items.len().saturating_sub(n)..].to_vec()),
    })
}
