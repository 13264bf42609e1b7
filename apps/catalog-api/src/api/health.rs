use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};

use crate::state::AppState;

/// Readiness probe.
///
/// Verifies the backing store is reachable. With the in-memory backend
/// there is nothing external to check, so the service is always ready.
async fn readiness_handler(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Some(client) = &state.mongo_client {
        checks.push((
            "mongodb",
            Box::pin(async move {
                if database::mongodb::check_health(client).await {
                    Ok(())
                } else {
                    Err("ping failed".to_string())
                }
            }),
        ));
    }

    match run_health_checks(checks).await {
        Ok(ready) => ready.into_response(),
        Err(not_ready) => not_ready.into_response(),
    }
}

pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_handler))
        .with_state(state.clone())
}
