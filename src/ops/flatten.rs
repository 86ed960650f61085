//! Arbitrarily nested sequences and their flattening.

use serde::{Deserialize, Serialize};

/// A scalar or a list of further nested values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Deepest list nesting; a bare leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::List(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }

    /// Leaves in order, consuming the tree.
    pub fn into_flat(self) -> Vec<T> {
        let mut out = Vec::new();
        push_leaves_owned(self, &mut out);
        out
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

/// Build a [`Nested::List`] from a literal.
///
/// ```
/// use collkit::{flatten, nested};
///
/// let tree = nested![1, [2, [3, [4, 5]], 6]];
/// assert_eq!(flatten(std::slice::from_ref(&tree)), vec![1, 2, 3, 4, 5, 6]);
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::nested![$($inner)*]
    };
    (@item $leaf:expr) => {
        $crate::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        $crate::Nested::List(vec![$($crate::nested!(@item $item)),*])
    };
}

/// Every leaf of `items`, in order, at any depth.
pub fn flatten<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        push_leaves(item, &mut out);
    }
    out
}

fn push_leaves<T: Clone>(node: &Nested<T>, out: &mut Vec<T>) {
    match node {
        Nested::Leaf(value) => out.push(value.clone()),
        Nested::List(children) => {
            for child in children {
                push_leaves(child, out);
            }
        }
    }
}

fn push_leaves_owned<T>(node: Nested<T>, out: &mut Vec<T>) {
    match node {
        Nested::Leaf(value) => out.push(value),
        Nested::List(children) => {
            for child in children {
                push_leaves_owned(child, out);
            }
        }
    }
}
