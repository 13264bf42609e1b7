//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// MongoDB implementation of the ItemRepository.
///
/// Documents are keyed by the item id: `_id` holds the hyphenated UUID string
/// and `created_date` the RFC 3339 timestamp (see [`Item`]'s serde layout),
/// so the stored documents remain readable with plain shell tooling.
pub struct MongoItemRepository {
    collection: Collection<Item>,
}

impl MongoItemRepository {
    /// Create a new MongoItemRepository over the default "items" collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("catalog");
    /// let repo = MongoItemRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, "items")
    }

    /// Create a new MongoItemRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Item>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Item> {
        &self.collection
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": id.to_string() }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Item> = cursor.try_collect().await?;
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let item = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(item)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn create(&self, item: Item) -> ItemResult<()> {
        self.collection.insert_one(&item).await?;

        tracing::info!(item_id = %item.id, "Item created");
        Ok(())
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn update(&self, item: Item) -> ItemResult<()> {
        let result = self
            .collection
            .replace_one(Self::id_filter(item.id), &item)
            .await?;

        if result.matched_count == 0 {
            return Err(ItemError::NotFound(item.id));
        }

        tracing::info!(item_id = %item.id, "Item updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ItemResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(item_id = %id, "Item deleted");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_uses_textual_uuid() {
        let id = Uuid::now_v7();
        let filter = MongoItemRepository::id_filter(id);
        assert_eq!(
            filter.get_str("_id").unwrap(),
            id.to_string()
        );
    }

    // Integration tests against a live MongoDB
    mod integration {
        use super::*;
        use crate::models::CreateItem;
        use mongodb::Client;

        async fn test_repo() -> MongoItemRepository {
            let url = std::env::var("MONGODB_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
            let client = Client::with_uri_str(&url).await.unwrap();
            let db = client.database("catalog_test");
            MongoItemRepository::with_collection(db, "items_test")
        }

        #[tokio::test]
        #[ignore] // Requires actual MongoDB
        async fn test_crud_roundtrip() {
            let repo = test_repo().await;

            let mut item = Item::new(CreateItem {
                name: "Potion".to_string(),
                description: String::new(),
                price: 9.0,
            });
            let id = item.id;

            repo.create(item.clone()).await.unwrap();
            assert_eq!(repo.get(id).await.unwrap(), Some(item.clone()));

            item.name = "Elixir".to_string();
            repo.update(item).await.unwrap();
            assert_eq!(repo.get(id).await.unwrap().unwrap().name, "Elixir");

            assert!(repo.delete(id).await.unwrap());
            assert!(repo.get(id).await.unwrap().is_none());
            assert!(!repo.delete(id).await.unwrap());
        }
    }
}
