//! Grouping, lookups and key-based joins.
//!
//! Groups keep the order in which their keys were first seen, and each
//! group keeps its elements in source order.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

/// A key together with every element that mapped to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grouping<K, T> {
    pub key: K,
    pub elements: Vec<T>,
}

/// A one-to-many map from key to elements, built eagerly.
///
/// Looking up a key that never occurred yields an empty slice rather than
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lookup<K: Hash + Eq, T> {
    groups: IndexMap<K, Vec<T>>,
}

impl<K: Hash + Eq, T> Lookup<K, T> {
    pub(crate) fn from_iter_by<I, F>(iter: I, mut key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
        for item in iter {
            groups.entry(key(&item)).or_default().push(item);
        }
        Lookup { groups }
    }

    /// Elements stored under `key`, empty when the key is absent.
    pub fn get(&self, key: &K) -> &[T] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    /// Consumes the lookup, returning one [`Grouping`] per key.
    pub fn into_groupings(self) -> Vec<Grouping<K, T>> {
        self.groups
            .into_iter()
            .map(|(key, elements)| Grouping { key, elements })
            .collect()
    }
}

/// Inner equi-join: one result per matching `(outer, inner)` pair.
///
/// Outer order is preserved; for each outer element its matches appear in
/// inner order. Outer elements without a match produce nothing.
pub(crate) fn join<O, I, K, OK, IK, R, F>(
    outer: O,
    inner: I,
    mut outer_key: OK,
    inner_key: IK,
    mut result: F,
) -> Vec<R>
where
    O: Iterator,
    I: IntoIterator,
    K: Hash + Eq,
    OK: FnMut(&O::Item) -> K,
    IK: FnMut(&I::Item) -> K,
    F: FnMut(&O::Item, &I::Item) -> R,
{
    let lookup = Lookup::from_iter_by(inner, inner_key);
    let mut joined = Vec::new();
    for o in outer {
        for i in lookup.get(&outer_key(&o)) {
            joined.push(result(&o, i));
        }
    }
    joined
}

/// Grouped join: one result per outer element, with all its matches.
///
/// Outer elements without a match still produce a result, with an empty
/// slice.
pub(crate) fn group_join<O, I, K, OK, IK, R, F>(
    outer: O,
    inner: I,
    mut outer_key: OK,
    inner_key: IK,
    mut result: F,
) -> Vec<R>
where
    O: Iterator,
    I: IntoIterator,
    K: Hash + Eq,
    OK: FnMut(&O::Item) -> K,
    IK: FnMut(&I::Item) -> K,
    F: FnMut(&O::Item, &[I::Item]) -> R,
{
    let lookup = Lookup::from_iter_by(inner, inner_key);
    outer
        .map(|o| {
            let matches = lookup.get(&outer_key(&o));
            result(&o, matches)
        })
        .collect()
}
