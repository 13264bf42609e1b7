use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for Item persistence
///
/// This trait defines the data access interface for items. Two backends
/// implement it: [`crate::mongodb::MongoItemRepository`] (persistent) and
/// [`crate::memory::InMemoryItemRepository`] (ephemeral, for tests/demo).
/// The caller assigns id and created_date before `create`; the repository
/// never generates either.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items; order is backend-dependent
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by id, `None` if absent
    async fn get(&self, id: Uuid) -> ItemResult<Option<Item>>;

    /// Insert a fully-populated item
    async fn create(&self, item: Item) -> ItemResult<()>;

    /// Replace the stored item matching `item.id`; `NotFound` if absent
    async fn update(&self, item: Item) -> ItemResult<()>;

    /// Delete an item by id; returns whether a record was removed
    async fn delete(&self, id: Uuid) -> ItemResult<bool>;
}
