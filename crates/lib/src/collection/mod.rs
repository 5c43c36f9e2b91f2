//! Ordered key/value collections.
//!
//! This module provides [`Collection`], an ordered sequence of uniquely keyed
//! entries with a fluent API for querying, mutating and transforming it.
//!
//! # Core Types
//!
//! - [`Collection`] - The ordered container itself
//! - [`Key`] - Integer or string entry keys
//! - [`Value`] - The default heterogeneous payload
//! - [`Number`] - Result of numeric aggregates
//! - [`Pick`] - Result of random sampling
//! - [`JsonOptions`] - Formatting and depth settings for JSON output
//!
//! # Mutation vs. derivation
//!
//! Methods come in two families and never switch between them:
//!
//! - **Mutating** (`&mut self`): `put`, `push`, `remove`, `pull`, `pop`,
//!   `shift`, `values`, `transform`. These change the receiver in place;
//!   `values` and `transform` return `&mut Self` for chaining.
//! - **Deriving** (`&self`): `keys`, `map`, `filter`, `unique`, `duplicates`,
//!   `reverse`, `shuffle`, `flip`, `random`. These return a new, independent
//!   collection and leave the receiver untouched.
//!
//! # Keys
//!
//! Keys are unique. `push` appends under the key `count()`, and `values()`
//! re-keys every entry to its position. An explicit integer `put` may leave
//! keys sparse or out of order until the next `values()`:
//!
//! ```
//! use collection::{Collection, Key, Value, collection};
//!
//! let mut numbers: Collection = collection![1, 2, 3];
//! numbers.put(10, Value::from(4));
//! assert!(numbers.has(10));
//!
//! numbers.values();
//! assert_eq!(numbers.get(3), Some(&Value::from(4)));
//! assert_eq!(numbers.keys().to_vec(), vec![Key::from(0), 1.into(), 2.into(), 3.into()]);
//! ```

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Slice;

pub mod aggregate;
pub mod errors;
pub mod json;
pub mod key;
pub mod random;
pub mod traits;
pub mod value;


pub use errors::CollectionError;
pub use json::JsonOptions;
pub use key::Key;
pub use random::Pick;
pub use traits::{Fields, Indexable, ToKey, ToNumber, ToText};
pub use value::{Number, Value};

/// Builds a `Collection<Value>` from a list of values or `key => value` pairs.
///
/// ```
/// use collection::{Collection, collection};
///
/// let list: Collection = collection![1, 2, 3];
/// assert_eq!(list.to_json().unwrap(), "[1,2,3]");
///
/// let map: Collection = collection! { "a" => "one", "b" => "two" };
/// assert_eq!(map.to_json().unwrap(), r#"{"a":"one","b":"two"}"#);
/// ```
#[macro_export]
macro_rules! collection {
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Collection::<$crate::Value>::from_entries(::std::vec![
            $(($crate::Key::from($key), $crate::Value::from($value))),+
        ])
    };
    ($($value:expr),* $(,)?) => {
        $crate::Collection::<$crate::Value>::from_values(::std::vec![
            $($crate::Value::from($value)),*
        ])
    };
}

/// An ordered sequence of `(Key, V)` entries with unique keys.
///
/// Entries live in an [`IndexMap`], so lookups by key are constant time and
/// iteration follows insertion order.
#[derive(Clone)]
pub struct Collection<V = Value> {
    entries: IndexMap<Key, V>,
}

impl<V> Collection<V> {
    /// Creates a new empty collection
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates a collection from an ordered sequence of entries.
    ///
    /// A key that repeats overwrites the earlier value and keeps the earlier
    /// position.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut collection = Self::new();
        collection.extend(entries);
        collection
    }

    /// Named equivalent of [`Collection::from_entries`]
    pub fn collect<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_entries(entries)
    }

    /// Creates a collection keyed by position `0..n-1`
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::from_unique_entries(
            values
                .into_iter()
                .enumerate()
                .map(|(position, value)| (Key::position(position), value)),
        )
    }

    /// Wraps entries whose keys are already known to be unique.
    pub(crate) fn from_unique_entries(entries: impl IntoIterator<Item = (Key, V)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the entry sequence as-is
    pub fn all(&self) -> &Slice<Key, V> {
        self.entries.as_slice()
    }

    /// Gets the value stored under `key`
    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.entries.get(&key.into())
    }

    /// Gets the value stored under `key`, falling back to `default`
    pub fn get_or<'a>(&'a self, key: impl Into<Key>, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns true if an entry exists under `key`
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Returns the first value in order
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, value)| value)
    }

    /// Returns the last value in order
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, value)| value)
    }

    /// Returns the number of entries
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the collection holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the collection holds at least one entry
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns true if the keys are exactly `0..count-1` in order
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(position, key)| key.is_position(position))
    }

    /// Returns an iterator over `(key, value)` pairs in order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Inserts `value` under `key`, overwriting in place if the key exists
    pub fn put(&mut self, key: impl Into<Key>, value: V) {
        self.entries.insert(key.into(), value);
    }

    /// Appends `value` under the key `count()`.
    ///
    /// The next key is the current count, not one past the largest integer
    /// key. After removals or explicit integer `put`s that key may already be
    /// taken, in which case the existing entry is overwritten.
    pub fn push(&mut self, value: V) {
        let key = Key::position(self.entries.len());
        if self.entries.contains_key(&key) {
            tracing::warn!(%key, "push is overwriting an existing entry");
        }
        self.put(key, value);
    }

    /// Removes the entry under `key`; does nothing if it is absent
    pub fn remove(&mut self, key: impl Into<Key>) {
        self.pull(key);
    }

    /// Removes the entry under `key` and returns its value
    pub fn pull(&mut self, key: impl Into<Key>) -> Option<V> {
        self.entries.shift_remove(&key.into())
    }

    /// Removes the entry under `key` and returns its value, or `default`
    pub fn pull_or(&mut self, key: impl Into<Key>, default: V) -> V {
        self.pull(key).unwrap_or(default)
    }

    /// Removes and returns the last value
    pub fn pop(&mut self) -> Option<V> {
        self.entries.pop().map(|(_, value)| value)
    }

    /// Removes and returns the first value.
    ///
    /// Integer keys of the remaining entries are renumbered from zero in
    /// order; string keys are left alone.
    pub fn shift(&mut self) -> Option<V> {
        let (_, value) = self.entries.shift_remove_index(0)?;

        let mut next = 0;
        self.rekey(|key| match key {
            Key::Int(_) => {
                let renumbered = Key::position(next);
                next += 1;
                renumbered
            }
            Key::Str(_) => key,
        });
        Some(value)
    }

    /// Re-keys every entry to its position, preserving order
    pub fn values(&mut self) -> &mut Self {
        let mut next = 0;
        self.rekey(|_| {
            let key = Key::position(next);
            next += 1;
            key
        });
        self
    }

    /// Applies `f` to every value in place, preserving keys
    pub fn transform<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(V) -> V,
    {
        self.entries = std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(key, value)| (key, f(value)))
            .collect();
        self
    }

    /// Returns the keys as a new positional collection
    pub fn keys(&self) -> Collection<Key> {
        Collection::from_values(self.entries.keys().cloned())
    }

    /// Returns a new collection with `f` applied to every value, same keys
    pub fn map<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&V) -> U,
    {
        Collection::from_unique_entries(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), f(value))),
        )
    }

    /// Left fold over the values in order
    pub fn reduce<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.entries.values().fold(initial, f)
    }

    /// Rebuilds the map with every key passed through `f`, in order.
    ///
    /// `f` must produce unique keys.
    fn rekey<F>(&mut self, mut f: F)
    where
        F: FnMut(Key) -> Key,
    {
        self.entries = std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(key, value)| (f(key), value))
            .collect();
    }
}

impl<V: Clone> Collection<V> {
    /// Returns an owned copy of the entry sequence
    pub fn to_array(&self) -> Vec<(Key, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns the values in order, without their keys
    pub fn to_vec(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }

    /// Returns a new collection of the entries where `predicate` holds.
    ///
    /// Keys are preserved; call [`Collection::values`] afterwards for
    /// contiguous positions.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        Self::from_unique_entries(
            self.iter()
                .filter(|(_, value)| predicate(value))
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }

    /// Returns a new collection in reverse order; keys travel with values
    pub fn reverse(&self) -> Self {
        Self::from_unique_entries(
            self.iter()
                .rev()
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }
}

impl<V: PartialEq> Collection<V> {
    /// Returns true if any entry holds `value`
    pub fn contains(&self, value: &V) -> bool {
        self.entries.values().any(|item| item == value)
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for Collection<V> {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order
        self.entries.as_slice() == other.entries.as_slice()
    }
}

impl<V: fmt::Debug> fmt::Debug for Collection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter())
            .finish()
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for Collection<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Iterator over the entries of a [`Collection`], in order.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: indexmap::map::Iter<'a, Key, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
