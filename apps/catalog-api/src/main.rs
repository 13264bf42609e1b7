use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, StorageBackend};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Connect the selected backend; the store handle is created once and
    // shared for the process lifetime
    let (mongo_client, db) = match (&config.backend, &config.mongodb) {
        (StorageBackend::MongoDb, Some(mongo)) => {
            info!("Connecting to MongoDB at {}", mongo.url());

            let client = database::mongodb::connect_from_config(mongo).await?;
            let db = client.database(mongo.database());

            info!(
                "Successfully connected to MongoDB database: {}",
                mongo.database()
            );
            (Some(client), Some(db))
        }
        _ => {
            info!("Using the in-memory item store (nothing is persisted)");
            (None, None)
        }
    };

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!(
        name = %state.config.app.name,
        version = %state.config.app.version,
        "Starting catalog API"
    );

    create_app(app, &state.config.server).await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
