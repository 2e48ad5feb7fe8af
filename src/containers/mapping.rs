//! Associative maps over kinds and keys.
//!
//! Three flavors share one contract:
//! - [`Surjection`]: unique keys, values may repeat.
//! - [`Bijection`]: unique keys and unique values, lookup either way.
//! - [`IndexMap`]: keys mapped to their dense ordinal position.
//!
//! Construction validates uniqueness up front; lookups never fail and
//! report absence with `None`.

use super::error::MappingError;
use super::list::List;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Key/value pairs with unique keys.
///
/// # Example
///
/// ```rust
/// use stateline::containers::Surjection;
///
/// let map = Surjection::from_pairs([("a", 1), ("b", 1), ("c", 2)]).unwrap();
///
/// assert_eq!(map.at_key(&"b"), Some(&1));
/// assert_eq!(map.at_key_or(&"z", &0), &0);
/// assert_eq!(map.values().len(), 2);
///
/// assert!(Surjection::from_pairs([("a", 1), ("a", 2)]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Surjection<K, V> {
    entries: Vec<(K, V)>,
    lookup: HashMap<K, usize>,
}

impl<K, V> Surjection<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Build from pairs, rejecting duplicate keys.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = Vec::new();
        let mut lookup = HashMap::new();

        for (key, value) in pairs {
            if lookup.contains_key(&key) {
                return Err(MappingError::DuplicateKey {
                    key: format!("{key:?}"),
                });
            }
            lookup.insert(key.clone(), entries.len());
            entries.push((key, value));
        }

        Ok(Self { entries, lookup })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value paired with `key`.
    pub fn at_key(&self, key: &K) -> Option<&V> {
        self.lookup.get(key).map(|&index| &self.entries[index].1)
    }

    /// Value paired with `key`, or `default` when absent.
    pub fn at_key_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.at_key(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.lookup.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> List<K> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Distinct values in first-seen order.
    pub fn values(&self) -> List<V>
    where
        V: PartialEq + Clone,
    {
        self.entries
            .iter()
            .map(|(_, value)| value.clone())
            .collect::<List<V>>()
            .make_unique()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

/// Key/value pairs unique on both sides.
///
/// # Example
///
/// ```rust
/// use stateline::containers::Bijection;
///
/// let map = Bijection::from_pairs([("one", 1), ("two", 2)]).unwrap();
///
/// assert_eq!(map.at_key(&"two"), Some(&2));
/// assert_eq!(map.at_value(&1), Some(&"one"));
/// assert!(!map.contains_value(&3));
///
/// assert!(Bijection::from_pairs([("one", 1), ("uno", 1)]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Bijection<K, V> {
    forward: Surjection<K, V>,
    backward: HashMap<V, usize>,
}

impl<K, V> Bijection<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Eq + Hash + Clone + Debug,
{
    /// Build from pairs, rejecting duplicate keys and duplicate values.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let forward = Surjection::from_pairs(pairs)?;
        let mut backward = HashMap::with_capacity(forward.len());

        for (index, (_, value)) in forward.entries.iter().enumerate() {
            if backward.insert(value.clone(), index).is_some() {
                return Err(MappingError::DuplicateValue {
                    value: format!("{value:?}"),
                });
            }
        }

        Ok(Self { forward, backward })
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn at_key(&self, key: &K) -> Option<&V> {
        self.forward.at_key(key)
    }

    pub fn at_key_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.forward.at_key_or(key, default)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    /// Key paired with `value`.
    pub fn at_value(&self, value: &V) -> Option<&K> {
        self.backward
            .get(value)
            .map(|&index| &self.forward.entries[index].0)
    }

    /// Key paired with `value`, or `default` when absent.
    pub fn at_value_or<'a>(&'a self, value: &V, default: &'a K) -> &'a K {
        self.at_value(value).unwrap_or(default)
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.backward.contains_key(value)
    }

    pub fn keys(&self) -> List<K> {
        self.forward.keys()
    }

    pub fn values(&self) -> List<V> {
        self.forward.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.forward.iter()
    }
}

/// Keys mapped to their ordinal position `0..N-1`, in list order.
///
/// # Example
///
/// ```rust
/// use stateline::containers::{IndexMap, Kind, KindList};
///
/// struct A;
/// struct B;
///
/// let list: KindList = vec![Kind::of::<A>(), Kind::of::<B>()].into();
/// let map = IndexMap::from_list(list).unwrap();
///
/// assert_eq!(map.at_key(&Kind::of::<B>()), Some(1));
/// assert_eq!(map.at_value(0), Some(&Kind::of::<A>()));
/// ```
#[derive(Clone, Debug)]
pub struct IndexMap<K> {
    keys: Vec<K>,
    lookup: HashMap<K, usize>,
}

impl<K> Default for IndexMap<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            lookup: HashMap::new(),
        }
    }
}

impl<K> IndexMap<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Build from a list of distinct keys.
    pub fn from_list(list: List<K>) -> Result<Self, MappingError> {
        let pairs = list.into_iter().enumerate().map(|(index, key)| (key, index));
        let bijection = Bijection::from_pairs(pairs)?;
        let keys = bijection.keys().repack();
        let lookup = bijection
            .iter()
            .map(|(key, &index)| (key.clone(), index))
            .collect();
        Ok(Self { keys, lookup })
    }

    /// Build from a list, dropping repeated keys first.
    pub fn from_unique(list: List<K>) -> Self {
        list.make_unique()
            .into_iter()
            .fold(Self::default(), |map, key| map.with(key))
    }

    /// Return the map with `key` appended, unless it is already present.
    ///
    /// This consumes the map and returns the grown one; an existing key
    /// keeps its ordinal.
    pub fn with(mut self, key: K) -> Self {
        if !self.lookup.contains_key(&key) {
            self.lookup.insert(key.clone(), self.keys.len());
            self.keys.push(key);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Ordinal of `key`.
    pub fn at_key(&self, key: &K) -> Option<usize> {
        self.lookup.get(key).copied()
    }

    /// Key at ordinal `index`.
    pub fn at_value(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.lookup.contains_key(key)
    }

    pub fn keys(&self) -> List<K> {
        self.keys.iter().cloned().collect()
    }
}
