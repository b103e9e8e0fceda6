use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;

/// Append-only, concurrency-safe map from a resource id to a resource handle
///
/// The only way to mutate a registry is [`Registry::set_if_missing`]: there
///  is no overwrite and no removal. A duplicate registration therefore shows
///  up as a `false` return at the call site that attempted it, instead of
///  silently replacing a resource somebody else registered.
///
/// Reads take a shared lock and may run concurrently with each other;
///  insertions take the exclusive lock.
pub struct Registry<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> Registry<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Look up the value registered under `key`
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().get(key).cloned()
    }

    /// Insert `value` under `key` only if nothing is registered there yet
    ///
    /// # Returns
    /// * `true` - the value was inserted
    /// * `false` - the key was already present; the registry is unchanged
    pub fn set_if_missing(&self, key: K, value: V) -> bool {
        let mut inner = self.inner.write();
        if inner.contains_key(&key) {
            return false;
        }
        inner.insert(key, value);
        true
    }

    /// Snapshot of every key registered so far, in no particular order
    pub fn keys(&self) -> Vec<K> {
        self.inner.read().keys().cloned().collect()
    }

    /// Snapshot of every value registered so far, in no particular order
    pub fn values(&self) -> Vec<V> {
        self.inner.read().values().cloned().collect()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<K, V> Default for Registry<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Registry<K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Registry")
            .field("keys", &inner.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_set_if_missing() {
        let registry = Registry::new();

        assert!(registry.set_if_missing("alice", 1));
        assert!(!registry.set_if_missing("alice", 2));

        // First value wins
        assert_eq!(registry.get(&"alice"), Some(1));
        assert_eq!(registry.values(), vec![1]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let registry: Registry<&str, u32> = Registry::new();
        assert_eq!(registry.get(&"bob"), None);
        assert!(!registry.contains(&"bob"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_keys_snapshot() {
        let registry = Registry::new();
        registry.set_if_missing("a", ());
        registry.set_if_missing("b", ());

        let keys: HashSet<_> = registry.keys().into_iter().collect();
        assert_eq!(keys, HashSet::from(["a", "b"]));

        // Later insertions do not leak into an earlier snapshot
        let snapshot = registry.keys();
        registry.set_if_missing("c", ());
        assert_eq!(snapshot.len(), 2);
        assert_eq!(registry.keys().len(), 3);
    }

    #[test]
    fn test_concurrent_same_key_single_winner() {
        let registry = Registry::new();
        let wins = AtomicUsize::new(0);

        thread::scope(|s| {
            for i in 0..16 {
                let registry = &registry;
                let wins = &wins;
                s.spawn(move || {
                    if registry.set_if_missing("shared", i) {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(wins.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_concurrent_distinct_keys_all_inserted() {
        let registry = Registry::new();

        thread::scope(|s| {
            for i in 0..32 {
                let registry = &registry;
                s.spawn(move || {
                    assert!(registry.set_if_missing(i, i * 2));
                });
            }
        });

        assert_eq!(registry.len(), 32);
        for i in 0..32 {
            assert_eq!(registry.get(&i), Some(i * 2));
        }
    }
}
