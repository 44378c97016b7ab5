//! In-process remote store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::RemoteStore;
use crate::errors::Result;

/// A `RemoteStore` kept entirely in memory.
///
/// Documents within a collection are listed in id order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, String)>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, blob)| (id.clone(), blob.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<String>> {
        let guard = self.collections.read().await;
        Ok(guard.get(collection).and_then(|docs| docs.get(id)).cloned())
    }

    async fn put(&self, collection: &str, id: &str, blob: &str) -> Result<()> {
        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), blob.to_string());
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut guard = self.collections.write().await;
        if let Some(docs) = guard.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_list_delete() {
        let store = MemoryStore::new();
        store.put("c", "b", "2").await.unwrap();
        store.put("c", "a", "1").await.unwrap();
        store.put("c", "a", "1b").await.unwrap();

        assert_eq!(store.get("c", "a").await.unwrap().as_deref(), Some("1b"));
        let ids: Vec<String> = store
            .list("c")
            .await
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, ["a", "b"]);

        store.delete("c", "a").await.unwrap();
        store.delete("c", "a").await.unwrap();
        assert_eq!(store.len("c").await, 1);
        assert!(store.list("missing").await.unwrap().is_empty());
    }
}
