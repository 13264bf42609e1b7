//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service layer handles validation, id and timestamp assignment, and
/// orchestrates repository operations.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item, assigning a fresh id and creation timestamp
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let item = Item::new(input);
        self.repository.create(item.clone()).await?;
        Ok(item)
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        self.repository
            .get(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// List all items
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Update an existing item.
    ///
    /// Fetches the stored record first; a miss returns `NotFound` without
    /// mutating anything. The update overwrites name, description and price
    /// while id and created_date are preserved from the stored record.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let mut item = self
            .repository
            .get(id)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        item.apply_update(input);
        self.repository.update(item.clone()).await?;
        Ok(item)
    }

    /// Delete an item; a miss returns `NotFound`
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> ItemResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn random_item() -> Item {
        Item::new(CreateItem {
            name: Uuid::new_v4().to_string(),
            description: Uuid::new_v4().to_string(),
            price: 42.0,
        })
    }

    #[tokio::test]
    async fn test_get_item_with_missing_id_returns_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_get().returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let err = service.get_item(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, ItemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_item_with_existing_id_returns_item() {
        let expected = random_item();
        let returned = expected.clone();

        let mut repo = MockItemRepository::new();
        repo.expect_get()
            .with(eq(expected.id))
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ItemService::new(repo);
        let item = service.get_item(expected.id).await.unwrap();

        assert_eq!(item, expected);
    }

    #[tokio::test]
    async fn test_list_items_returns_all_items() {
        let expected = vec![random_item(), random_item(), random_item()];
        let returned = expected.clone();

        let mut repo = MockItemRepository::new();
        repo.expect_list().returning(move || Ok(returned.clone()));

        let service = ItemService::new(repo);
        let items = service.list_items().await.unwrap();

        assert_eq!(items, expected);
    }

    #[tokio::test]
    async fn test_create_item_assigns_fresh_id_and_timestamp() {
        let mut repo = MockItemRepository::new();
        repo.expect_create().returning(|_| Ok(()));

        let service = ItemService::new(repo);
        let input = CreateItem {
            name: "Potion".to_string(),
            description: String::new(),
            price: 9.0,
        };

        let before = Utc::now();
        let item = service.create_item(input).await.unwrap();

        assert!(!item.id.is_nil());
        assert_eq!(item.name, "Potion");
        assert_eq!(item.price, 9.0);
        let age = (Utc::now() - item.created_date).num_milliseconds().abs();
        assert!(age < 1000, "created_date should be close to now");
        assert!(item.created_date >= before);
    }

    #[tokio::test]
    async fn test_create_item_rejects_out_of_range_price() {
        let mut repo = MockItemRepository::new();
        repo.expect_create().never();

        let service = ItemService::new(repo);
        let input = CreateItem {
            name: "Potion".to_string(),
            description: String::new(),
            price: 1001.0,
        };

        let err = service.create_item(input).await.unwrap_err();
        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_item_overwrites_mutable_fields_only() {
        let existing = random_item();
        let fetched = existing.clone();

        let mut repo = MockItemRepository::new();
        repo.expect_get()
            .with(eq(existing.id))
            .returning(move |_| Ok(Some(fetched.clone())));
        repo.expect_update().returning(|_| Ok(()));

        let service = ItemService::new(repo);
        let input = UpdateItem {
            name: "Elixir".to_string(),
            description: "restores mana".to_string(),
            price: existing.price + 3.0,
        };

        let updated = service.update_item(existing.id, input).await.unwrap();

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.created_date, existing.created_date);
        assert_eq!(updated.name, "Elixir");
        assert_eq!(updated.price, existing.price + 3.0);
    }

    #[tokio::test]
    async fn test_update_item_with_missing_id_performs_no_mutation() {
        let mut repo = MockItemRepository::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_update().never();

        let service = ItemService::new(repo);
        let input = UpdateItem {
            name: "Elixir".to_string(),
            description: String::new(),
            price: 12.0,
        };

        let err = service.update_item(Uuid::now_v7(), input).await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_item_with_missing_id_returns_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = ItemService::new(repo);
        let err = service.delete_item(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, ItemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_item_with_existing_id_succeeds() {
        let id = Uuid::now_v7();
        let mut repo = MockItemRepository::new();
        repo.expect_delete().with(eq(id)).returning(|_| Ok(true));

        let service = ItemService::new(repo);
        assert!(service.delete_item(id).await.is_ok());
    }
}
