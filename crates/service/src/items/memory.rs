use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::ServiceError;
use crate::items::domain::{Item, ItemPatch, NewItem};
use crate::items::store::ItemStore;
use crate::storage::seq_map_store::SeqMapStore;

/// Process-lifetime item store. Starts empty, ids count up from "1".
#[derive(Clone, Default)]
pub struct InMemoryItemStore {
    store: Arc<SeqMapStore<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.store.is_empty().await
    }
}

/// Map an external id onto its sequence number. Only the canonical decimal
/// form matches, so "01" or "+1" never resolve to item "1".
fn parse_id(id: &str) -> Option<u64> {
    let seq = id.parse::<u64>().ok()?;
    (seq.to_string() == id).then_some(seq)
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> Vec<Item> {
        self.store.list().await
    }

    async fn create(&self, input: NewItem) -> Result<Item, ServiceError> {
        let item = self
            .store
            .insert_next(|seq| input.into_item(seq.to_string()))
            .await;
        debug!(id = %item.id, "item inserted");
        Ok(item)
    }

    async fn get(&self, id: &str) -> Result<Item, ServiceError> {
        let seq = parse_id(id).ok_or_else(|| ServiceError::not_found("item", id))?;
        self.store
            .get(seq)
            .await
            .ok_or_else(|| ServiceError::not_found("item", id))
    }

    async fn update(&self, id: &str, patch: ItemPatch) -> Result<Item, ServiceError> {
        let seq = parse_id(id).ok_or_else(|| ServiceError::not_found("item", id))?;
        let updated = self
            .store
            .update(seq, |current| {
                *current = patch.apply(current);
                current.clone()
            })
            .await
            .ok_or_else(|| ServiceError::not_found("item", id))?;
        debug!(id = %updated.id, ignored_all_fields = patch.is_empty(), "item replaced");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let seq = parse_id(id).ok_or_else(|| ServiceError::not_found("item", id))?;
        if self.store.remove(seq).await {
            debug!(%id, "item removed");
            Ok(())
        } else {
            Err(ServiceError::not_found("item", id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_item(name: &str, quantity: u64) -> NewItem {
        NewItem { name: name.into(), quantity }
    }

    #[tokio::test]
    async fn item_store_crud() -> anyhow::Result<()> {
        let store = InMemoryItemStore::new();
        assert!(store.list().await.is_empty());

        // create
        let pencil = store.create(new_item("pencil", 1)).await?;
        assert_eq!(pencil, Item { id: "1".into(), name: "pencil".into(), quantity: 1 });
        let pen = store.create(new_item("pen", 3)).await?;
        assert_eq!(pen.id, "2");

        // get
        assert_eq!(store.get("1").await?, pencil);

        // update: quantity only
        let patch = ItemPatch::from_json(&json!({"quantity": 5}));
        let updated = store.update("1", patch).await?;
        assert_eq!(updated, Item { id: "1".into(), name: "pencil".into(), quantity: 5 });
        assert_eq!(store.get("1").await?, updated);

        // list keeps insertion order after update
        let ids: Vec<_> = store.list().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1", "2"]);

        // delete
        store.delete("1").await?;
        assert!(matches!(store.get("1").await, Err(ServiceError::NotFound(_))));
        assert_eq!(store.list().await, vec![pen]);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_update_leaves_item_unchanged() -> anyhow::Result<()> {
        let store = InMemoryItemStore::new();
        let created = store.create(new_item("lapis", 1)).await?;

        let patch = ItemPatch::from_json(&json!({"name": false, "quantity": -1}));
        let same = store.update(&created.id, patch).await?;
        assert_eq!(same, created);
        assert_eq!(store.get(&created.id).await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let store = InMemoryItemStore::new();
        store.create(new_item("caderno", 2)).await.unwrap();

        for id in ["0", "2", "01", "+1", " 1", "abc", ""] {
            assert!(matches!(store.get(id).await, Err(ServiceError::NotFound(_))), "get {id:?}");
            assert!(
                matches!(store.update(id, ItemPatch::default()).await, Err(ServiceError::NotFound(_))),
                "update {id:?}"
            );
            assert!(matches!(store.delete(id).await, Err(ServiceError::NotFound(_))), "delete {id:?}");
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reassigned() -> anyhow::Result<()> {
        let store = InMemoryItemStore::new();
        let first = store.create(new_item("caneta", 3)).await?;
        store.delete(&first.id).await?;
        assert!(store.is_empty().await);

        let second = store.create(new_item("caneta", 3)).await?;
        assert_ne!(second.id, first.id);
        assert_eq!(second.id, "2");
        Ok(())
    }

    #[tokio::test]
    async fn works_behind_trait_object() -> anyhow::Result<()> {
        let store: Arc<dyn ItemStore> = InMemoryItemStore::new();
        let item = store.create(new_item("regua", 0)).await?;
        assert_eq!(store.get(&item.id).await?.quantity, 0);
        Ok(())
    }
}
