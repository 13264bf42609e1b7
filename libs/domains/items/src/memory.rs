//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item};
use crate::repository::ItemRepository;

/// In-memory implementation of the ItemRepository.
///
/// Backed by an ordered list behind an async `RwLock`. Intended for tests and
/// local demos; nothing survives a restart and duplicate ids are not checked
/// (callers generate fresh ids via [`Item::new`]).
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with a few sample rows, handy for demos
    pub fn with_sample_items() -> Self {
        let samples = [("Potion", 9.0), ("Iron Sword", 11.0), ("Bronze Shield", 5.4)];

        let items = samples
            .into_iter()
            .map(|(name, price)| {
                Item::new(CreateItem {
                    name: name.to_string(),
                    description: String::new(),
                    price,
                })
            })
            .collect();

        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn create(&self, item: Item) -> ItemResult<()> {
        self.items.write().await.push(item);
        Ok(())
    }

    async fn update(&self, item: Item) -> ItemResult<()> {
        let mut items = self.items.write().await;
        match items.iter().position(|existing| existing.id == item.id) {
            Some(index) => {
                items[index] = item;
                Ok(())
            }
            None => Err(ItemError::NotFound(item.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> ItemResult<bool> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, price: f64) -> Item {
        Item::new(CreateItem {
            name: name.to_string(),
            description: String::new(),
            price,
        })
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let repo = InMemoryItemRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sample_items_are_seeded() {
        let repo = InMemoryItemRepository::with_sample_items();
        let items = repo.list().await.unwrap();

        assert_eq!(items.len(), 3);
        assert!(items.iter().any(|i| i.name == "Potion" && i.price == 9.0));
        assert!(items.iter().any(|i| i.name == "Bronze Shield"));
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrips() {
        let repo = InMemoryItemRepository::new();
        let item = sample("Potion", 9.0);
        let id = item.id;

        repo.create(item.clone()).await.unwrap();

        let fetched = repo.get(id).await.unwrap().expect("item should exist");
        assert_eq!(fetched, item);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = InMemoryItemRepository::new();
        assert!(repo.get(Uuid::now_v7()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_matching_item() {
        let repo = InMemoryItemRepository::new();
        let mut item = sample("Potion", 9.0);
        repo.create(item.clone()).await.unwrap();

        item.name = "Elixir".to_string();
        item.price = 12.0;
        repo.update(item.clone()).await.unwrap();

        let fetched = repo.get(item.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Elixir");
        assert_eq!(fetched.price, 12.0);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryItemRepository::new();
        let item = sample("Ghost", 2.0);

        let err = repo.update(item).await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let repo = InMemoryItemRepository::new();
        let item = sample("Potion", 9.0);
        let id = item.id;
        repo.create(item).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
        assert!(repo.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_after_creates_and_deletes() {
        let repo = InMemoryItemRepository::new();
        let mut ids = Vec::new();

        for i in 0..5 {
            let item = sample(&format!("item-{i}"), 10.0 + i as f64);
            ids.push(item.id);
            repo.create(item).await.unwrap();
        }

        for id in ids.iter().take(2) {
            assert!(repo.delete(*id).await.unwrap());
        }

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 3);
        for id in ids.iter().skip(2) {
            assert!(remaining.iter().any(|item| item.id == *id));
        }
    }
}
