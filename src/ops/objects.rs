//! Merging keyed records.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};

/// A mutable key/value record that can absorb entries from others.
pub trait Assign {
    type Key;
    type Value;

    fn has_key(&self, key: &Self::Key) -> bool;

    fn assign(&mut self, key: Self::Key, value: Self::Value);

    fn entries(&self) -> Vec<(Self::Key, Self::Value)>;
}

impl<K, V, S> Assign for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl Assign for Map<String, Value> {
    type Key = String;
    type Value = Value;

    fn has_key(&self, key: &String) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: String, value: Value) {
        self.insert(key, value);
    }

    fn entries(&self) -> Vec<(String, Value)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// Copy every entry of every source into `target`; later sources win.
pub fn extend<'t, R: Assign>(target: &'t mut R, sources: &[R]) -> &'t mut R {
    for source in sources {
        for (key, value) in source.entries() {
            target.assign(key, value);
        }
    }
    target
}

/// Copy entries whose key `target` does not already have.
///
/// Keys are checked against the target as it grows, so the first source
/// providing a missing key wins.
pub fn defaults<'t, R: Assign>(target: &'t mut R, sources: &[R]) -> &'t mut R {
    for source in sources {
        for (key, value) in source.entries() {
            if !target.has_key(&key) {
                target.assign(key, value);
            }
        }
    }
    target
}
