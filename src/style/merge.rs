//! Right-biased shallow merging of resolved styles.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};

/// A value that can absorb another value of the same type.
///
/// `merge` is a right-biased shallow merge: keys present in `other` override
/// keys in `self`, keys present on only one side are kept. Together with
/// [`empty`](Merge::empty) this forms the monoid used by
/// [`Style::concat`](super::Style::concat).
pub trait Merge {
    /// The mapping with no keys, identity for `merge`.
    fn empty() -> Self;

    /// Merges `other` into `self`, with `other` winning on collisions.
    fn merge(self, other: Self) -> Self;
}

impl Merge for Map<String, Value> {
    fn empty() -> Self {
        Map::new()
    }

    fn merge(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Object values merge key by key. A non-object operand contributes no keys,
/// so the result is always an object.
impl Merge for Value {
    fn empty() -> Self {
        Value::Object(Map::new())
    }

    fn merge(self, other: Self) -> Self {
        let left = match self {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        match other {
            Value::Object(right) => Value::Object(left.merge(right)),
            _ => Value::Object(left),
        }
    }
}

impl<K, V, S> Merge for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn empty() -> Self {
        HashMap::default()
    }

    fn merge(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<K: Ord, V> Merge for BTreeMap<K, V> {
    fn empty() -> Self {
        BTreeMap::new()
    }

    fn merge(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
