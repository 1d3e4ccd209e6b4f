use {
    std::collections::BTreeMap,
    tokio::sync::RwLock,
};

/// An in-process ordered key-value table.
///
/// Stands in for the durable ordered map the registry keeps its records in:
/// point get, insert-or-replace, remove and full enumeration in key order.
#[derive(Debug)]
pub struct OrderedStore<K, V> {
    entries: RwLock<BTreeMap<K, V>>,
}

impl<K, V> Default for OrderedStore<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<K: Ord, V: Clone> OrderedStore<K, V> {
    pub async fn get(&self, key: &K) -> Option<V> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        self.entries.write().await.insert(key, value)
    }

    pub async fn remove(&self, key: &K) -> Option<V> {
        self.entries.write().await.remove(key)
    }

    pub async fn values(&self) -> Vec<V> {
        self.entries.read().await.values().cloned().collect()
    }
}
