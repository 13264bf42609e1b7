use axum::Router;
use domain_items::{handlers, InMemoryItemRepository, ItemService, MongoItemRepository};

use crate::state::AppState;

/// Builds the item routes against whichever repository the configuration
/// selected at startup.
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(ItemService::new(MongoItemRepository::new(db.clone()))),
        None => handlers::router(ItemService::new(InMemoryItemRepository::with_sample_items())),
    }
}
