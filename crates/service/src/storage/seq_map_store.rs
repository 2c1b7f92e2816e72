use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Generic in-memory map keyed by a store-allocated sequence number.
///
/// Keys start at 1 and grow by one per insert; a removed key is never handed
/// out again. Because keys only grow, iterating the map yields entries in
/// insertion order. The entries and the counter share one lock, so each
/// method observes and mutates them atomically.
pub struct SeqMapStore<V> {
    inner: RwLock<Inner<V>>,
}

struct Inner<V> {
    entries: BTreeMap<u64, V>,
    next_seq: u64,
}

impl<V: Clone> SeqMapStore<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: BTreeMap::new(),
                next_seq: 1,
            }),
        }
    }

    /// All values in insertion order.
    pub async fn list(&self) -> Vec<V> {
        let inner = self.inner.read().await;
        inner.entries.values().cloned().collect()
    }

    pub async fn get(&self, seq: u64) -> Option<V> {
        let inner = self.inner.read().await;
        inner.entries.get(&seq).cloned()
    }

    /// Allocate the next key, build the value from it and insert it.
    pub async fn insert_next<F>(&self, build: F) -> V
    where
        F: FnOnce(u64) -> V,
    {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let value = build(seq);
        inner.entries.insert(seq, value.clone());
        value
    }

    /// Apply a mutation to the value under `seq`; `None` when absent.
    pub async fn update<F, R>(&self, seq: u64, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R,
    {
        let mut inner = self.inner.write().await;
        inner.entries.get_mut(&seq).map(f)
    }

    /// Remove a key; returns whether it existed.
    pub async fn remove(&self, seq: u64) -> bool {
        let mut inner = self.inner.write().await;
        inner.entries.remove(&seq).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<V: Clone> Default for SeqMapStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seq_map_store_allocates_and_never_reuses_keys() {
        let store = SeqMapStore::<String>::new();

        // initially empty
        assert!(store.is_empty().await);

        let a = store.insert_next(|seq| format!("a{seq}")).await;
        let b = store.insert_next(|seq| format!("b{seq}")).await;
        assert_eq!(a, "a1");
        assert_eq!(b, "b2");

        // update in place keeps position
        let old = store.update(1, |v| std::mem::replace(v, "a1'".into())).await;
        assert_eq!(old.as_deref(), Some("a1"));
        assert_eq!(store.list().await, vec!["a1'".to_string(), "b2".to_string()]);
        assert!(store.update(9, |_| ()).await.is_none());

        // removed keys are gone and not handed out again
        assert!(store.remove(2).await);
        assert!(!store.remove(2).await);
        let c = store.insert_next(|seq| format!("c{seq}")).await;
        assert_eq!(c, "c3");
        assert_eq!(store.get(2).await, None);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_keys() {
        let store = std::sync::Arc::new(SeqMapStore::<u64>::new());
        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.insert_next(|seq| seq).await }));
        }
        let mut keys = Vec::new();
        for h in handles {
            keys.push(h.await.unwrap());
        }
        keys.sort_unstable();
        assert_eq!(keys, (1..=32).collect::<Vec<_>>());
        assert_eq!(store.list().await, (1..=32).collect::<Vec<_>>());
    }
}
