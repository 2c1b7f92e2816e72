use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::items::domain::{Item, ItemPatch, NewItem};

/// Trait abstraction for item storage.
///
/// Every method is atomic with respect to the others: a concurrent caller
/// never observes half of a create, update or delete.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items in insertion order; updates do not move an item.
    async fn list(&self) -> Vec<Item>;
    /// Store a validated item under the next id.
    async fn create(&self, input: NewItem) -> Result<Item, ServiceError>;
    async fn get(&self, id: &str) -> Result<Item, ServiceError>;
    /// Merge `patch` into the stored item. Fields absent from the patch keep
    /// their value; only an unknown id is an error.
    async fn update(&self, id: &str, patch: ItemPatch) -> Result<Item, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
