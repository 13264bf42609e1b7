use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Item entity - a priced catalog entry.
///
/// Stored documents keep the id under `_id` and serialize both the id and the
/// creation timestamp as plain strings (hyphenated UUID, RFC 3339), so the
/// collection stays portable and inspectable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Item description
    #[serde(default)]
    pub description: String,
    /// Price
    pub price: f64,
    /// Creation timestamp, set once and never modified
    pub created_date: DateTime<Utc>,
}

/// Wire-facing view of an [`Item`].
///
/// Same fields as the entity, but the id is exposed as `id` rather than the
/// storage-level `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_date: DateTime<Utc>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1.0, max = 1000.0))]
    pub price: f64,
}

/// DTO for updating an existing item.
///
/// A full overwrite of the mutable fields; id and created_date are preserved
/// from the stored record.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1.0, max = 1000.0))]
    pub price: f64,
}

impl Item {
    /// Create a new item from a CreateItem DTO, assigning a fresh id and
    /// creation timestamp
    pub fn new(input: CreateItem) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            created_date: Utc::now(),
        }
    }

    /// Apply an update, overwriting the mutable fields only
    pub fn apply_update(&mut self, update: UpdateItem) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
    }
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            created_date: item.created_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateItem {
        CreateItem {
            name: "Potion".to_string(),
            description: String::new(),
            price: 9.0,
        }
    }

    #[test]
    fn test_new_item_assigns_id_and_timestamp() {
        let before = Utc::now();
        let item = Item::new(create_input());

        assert!(!item.id.is_nil());
        assert_eq!(item.name, "Potion");
        assert_eq!(item.price, 9.0);
        assert!(item.created_date >= before);
        assert!(item.created_date <= Utc::now());
    }

    #[test]
    fn test_new_items_get_distinct_ids() {
        let a = Item::new(create_input());
        let b = Item::new(create_input());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_update_preserves_id_and_created_date() {
        let mut item = Item::new(create_input());
        let id = item.id;
        let created = item.created_date;

        item.apply_update(UpdateItem {
            name: "Elixir".to_string(),
            description: "restores mana".to_string(),
            price: 12.0,
        });

        assert_eq!(item.id, id);
        assert_eq!(item.created_date, created);
        assert_eq!(item.name, "Elixir");
        assert_eq!(item.description, "restores mana");
        assert_eq!(item.price, 12.0);
    }

    #[test]
    fn test_item_serializes_id_as_string_under_underscore_id() {
        let item = Item::new(create_input());
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["_id"], serde_json::json!(item.id.to_string()));
        assert!(value["created_date"].is_string());
    }

    #[test]
    fn test_view_exposes_plain_id() {
        let item = Item::new(create_input());
        let id = item.id;
        let view = ItemView::from(item);
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["id"], serde_json::json!(id.to_string()));
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_create_item_validation() {
        use validator::Validate;

        let valid = create_input();
        assert!(valid.validate().is_ok());

        let empty_name = CreateItem {
            name: String::new(),
            ..create_input()
        };
        assert!(empty_name.validate().is_err());

        let price_too_low = CreateItem {
            price: 0.5,
            ..create_input()
        };
        assert!(price_too_low.validate().is_err());

        let price_too_high = CreateItem {
            price: 1000.5,
            ..create_input()
        };
        assert!(price_too_high.validate().is_err());
    }
}
