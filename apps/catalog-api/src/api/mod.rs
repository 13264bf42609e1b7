use axum::Router;

use crate::state::AppState;

mod health;
mod items;

/// Builds the API route tree from application state.
///
/// The item routes are nested under `/items`; together with the `/api`
/// prefix applied by the top-level router this yields `/api/items`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .merge(health::router(state))
}
