//! Property lookup and three-way comparison.
//!
//! `pluck` and `sort_by_property` address records by field name; these
//! traits describe what counts as a record and how extracted keys compare.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// A value whose fields can be read by name.
pub trait Record {
    type Field;

    fn field(&self, name: &str) -> Option<&Self::Field>;
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl Record for Map<String, Value> {
    type Field = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Objects expose their members; every other JSON value has no fields.
impl Record for Value {
    type Field = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(name))
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Field = R::Field;

    fn field(&self, name: &str) -> Option<&R::Field> {
        (**self).field(name)
    }
}

/// Total three-way comparison used for sorting.
///
/// Pairs that have no natural order (NaN, mismatched JSON types of equal
/// rank) compare `Equal`, so a stable sort leaves them in input order.
pub trait ThreeWay {
    fn three_way(&self, other: &Self) -> Ordering;
}

macro_rules! impl_three_way_ord {
    ($($t:ty),*) => {
        $(
            impl ThreeWay for $t {
                #[inline]
                fn three_way(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_three_way_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String
);

macro_rules! impl_three_way_float {
    ($($t:ty),*) => {
        $(
            impl ThreeWay for $t {
                #[inline]
                fn three_way(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other).unwrap_or(Ordering::Equal)
                }
            }
        )*
    };
}

impl_three_way_float!(f32, f64);

impl ThreeWay for () {
    fn three_way(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

/// Absent keys sort first.
impl<T: ThreeWay> ThreeWay for Option<T> {
    fn three_way(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.three_way(b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

impl<T: ThreeWay + ?Sized> ThreeWay for &T {
    fn three_way(&self, other: &Self) -> Ordering {
        (**self).three_way(*other)
    }
}

impl<A: ThreeWay, B: ThreeWay> ThreeWay for (A, B) {
    fn three_way(&self, other: &Self) -> Ordering {
        self.0
            .three_way(&other.0)
            .then_with(|| self.1.three_way(&other.1))
    }
}

impl ThreeWay for Value {
    fn three_way(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.three_way(&y),
                _ => Ordering::Equal,
            },
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (a, b) => json_rank(a).cmp(&json_rank(b)),
        }
    }
}

fn json_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
