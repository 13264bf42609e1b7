//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers: the configuration and, for the mongodb backend, the client and
//! database handles.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned for each handler (inexpensive; the Mongo client shares one
/// underlying connection pool). The store handles are `None` when the
/// in-memory backend is selected.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Option<Client>,
    /// MongoDB database instance
    pub db: Option<Database>,
}
