// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Thread-safe map exposed as a live stream of full snapshots.
//!
//! ## Guarantees
//!
//! - **Consistent snapshots**: [`items`](ObservableDictionary::items) and
//!   [`count`](ObservableDictionary::count) only ever observe complete mappings, never a
//!   half-applied mutation.
//! - **Replay on subscribe**: a subscriber first receives the current mapping, then one
//!   snapshot per later mutation.
//! - **Total order**: mutations are serialized by a single lock per dictionary, and every
//!   subscriber observes their snapshots in that order, without gaps or duplicates.
//! - **No re-entrancy hazard**: snapshots are only enqueued while the lock is held; they
//!   are delivered when the subscriber polls its stream. A subscriber may therefore mutate
//!   the same dictionary while reacting to a snapshot.
//! - **Isolation**: published snapshots are immutable [`Snapshot`]s shared between
//!   subscribers; a mutation never changes a snapshot that was already handed out.
//!
//! A mutation copies the map only while an older snapshot is still referenced, so the cost of
//! a write does not grow with the number of subscribers.
//!
//! The iteration order used by [`first`](ObservableDictionary::first) is the map's own,
//! unspecified order. Consumers that need determinism must sort snapshot entries themselves.
//!
//! ## Lifecycle
//!
//! Clones are handles to the same storage. When the last handle is dropped, every
//! outstanding `items`/`count` stream completes.

use core::fmt;
use core::hash::Hash;
use futures::{Stream, StreamExt};
use ripple_core::{LatestValueSubject, SubjectBoxStream};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::sync::Arc;

/// An immutable, shared view of the whole mapping at one point in time.
pub type Snapshot<K, V> = Arc<HashMap<K, V>>;

/// A synchronized key-value container that publishes its contents as snapshots.
///
/// See the [module documentation](self) for the guarantees it provides.
pub struct ObservableDictionary<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // The subject's lock is the dictionary's guard: it serializes every
    // read-modify-write together with the snapshot fan-out.
    storage: LatestValueSubject<Snapshot<K, V>>,
}

impl<K, V> ObservableDictionary<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_elements(HashMap::new())
    }

    /// Creates a dictionary seeded with `elements`.
    #[must_use]
    pub fn with_elements(elements: HashMap<K, V>) -> Self {
        Self {
            storage: LatestValueSubject::new(Arc::new(elements)),
        }
    }

    /// Live stream of full snapshots.
    ///
    /// Emits the current mapping immediately, then one snapshot per later mutation.
    /// It never fails; it completes when the last dictionary handle is dropped.
    pub fn items(&self) -> SubjectBoxStream<Snapshot<K, V>> {
        self.storage.subscribe()
    }

    /// Live stream of the number of entries, derived from [`items`](Self::items).
    pub fn count(&self) -> impl Stream<Item = usize> + Send + Sync + Unpin + 'static {
        self.items().map(|snapshot| snapshot.len())
    }

    /// Inserts or overwrites `key` when `value` is `Some`, removes it when `None`.
    ///
    /// A snapshot is published after every call, including the removal of an absent key.
    pub fn set_value(&self, key: K, value: Option<V>) {
        self.mutate(move |map| match value {
            Some(value) => {
                map.insert(key, value);
            }
            None => {
                map.remove(&key);
            }
        });
    }

    /// Returns a copy of the value stored under `key`.
    pub fn value_for_key<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.with_value(|map| map.get(key).cloned())
    }

    /// Removes `key`; same effect as `set_value(key, None)`.
    pub fn remove_value_for_key<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.mutate(|map| {
            map.remove(key);
        });
    }

    /// Returns the first entry, in the map's unspecified order, that satisfies `predicate`.
    ///
    /// The search runs over one consistent snapshot taken under the dictionary's lock.
    /// `predicate` itself runs after the lock is released, so it may read or mutate this
    /// dictionary; such mutations are not seen by the ongoing search.
    pub fn first<P>(&self, mut predicate: P) -> Option<(K, V)>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.current()
            .iter()
            .find(|(key, value)| predicate(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    /// Returns a copy of the current mapping.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<K, V> {
        HashMap::clone(&self.current())
    }

    /// Returns the current mapping as a shared, immutable snapshot.
    #[must_use]
    pub fn current(&self) -> Snapshot<K, V> {
        self.storage.value()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.with_value(|map| map.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.with_value(|map| map.is_empty())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.with_value(|map| map.contains_key(key))
    }

    /// Number of live `items`/`count` subscriptions (pruned lazily on mutation).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.storage.subscriber_count()
    }

    fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut HashMap<K, V>),
    {
        // The storage is never closed while a handle exists; this is unreachable through
        // the public API but must not take the caller down.
        // `make_mut` copies the map only while a published snapshot is still alive.
        if let Err(error) = self.storage.update(|snapshot| f(Arc::make_mut(snapshot))) {
            warn!("observable dictionary dropped a mutation: {}", error);
        }
    }
}

impl<K, V> Default for ObservableDictionary<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for ObservableDictionary<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<K, V> From<HashMap<K, V>> for ObservableDictionary<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn from(elements: HashMap<K, V>) -> Self {
        Self::with_elements(elements)
    }
}

impl<K, V> FromIterator<(K, V)> for ObservableDictionary<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::with_elements(iter.into_iter().collect())
    }
}

impl<K, V> fmt::Debug for ObservableDictionary<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + fmt::Debug + 'static,
    V: Clone + Send + Sync + fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.current().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_an_absent_key_leaves_content_unchanged() {
        let dictionary: ObservableDictionary<&str, i32> = [("a", 1)].into_iter().collect();

        dictionary.set_value("missing", None);

        assert_eq!(dictionary.snapshot(), HashMap::from([("a", 1)]));
    }

    #[test]
    fn overwrite_keeps_a_single_entry() {
        let dictionary = ObservableDictionary::new();

        dictionary.set_value("a", Some(1));
        dictionary.set_value("a", Some(2));

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.value_for_key("a"), Some(2));
    }

    #[test]
    fn debug_lists_entries() {
        let dictionary: ObservableDictionary<&str, i32> = HashMap::from([("k", 9)]).into();
        assert_eq!(format!("{dictionary:?}"), r#"{"k": 9}"#);
    }
}
