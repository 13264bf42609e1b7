use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Storage backend selected at startup; no runtime switching
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    /// Ephemeral in-process list, for tests and local demos
    Memory,
    /// Persistent document store
    MongoDb,
}

impl StorageBackend {
    /// Reads STORAGE_BACKEND ("mongodb" by default, "memory" for the
    /// in-process store)
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = env_or_default("STORAGE_BACKEND", "mongodb");

        match value.to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            other => Err(ConfigError::ParseError {
                key: "STORAGE_BACKEND".to_string(),
                details: format!("unknown backend '{}'", other),
            }),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub backend: StorageBackend,
    /// Present only when the mongodb backend is selected
    pub mongodb: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let backend = StorageBackend::from_env()?;
        let mongodb = match backend {
            StorageBackend::MongoDb => Some(MongoConfig::from_env()?),
            StorageBackend::Memory => None,
        };
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            backend,
            mongodb,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_defaults_to_mongodb() {
        temp_env::with_var_unset("STORAGE_BACKEND", || {
            assert_eq!(StorageBackend::from_env().unwrap(), StorageBackend::MongoDb);
        });
    }

    #[test]
    fn test_storage_backend_memory() {
        temp_env::with_var("STORAGE_BACKEND", Some("memory"), || {
            assert_eq!(StorageBackend::from_env().unwrap(), StorageBackend::Memory);
        });
    }

    #[test]
    fn test_storage_backend_rejects_unknown() {
        temp_env::with_var("STORAGE_BACKEND", Some("cassandra"), || {
            assert!(StorageBackend::from_env().is_err());
        });
    }

    #[test]
    fn test_config_memory_backend_needs_no_mongo_settings() {
        temp_env::with_vars(
            [
                ("STORAGE_BACKEND", Some("memory")),
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.backend, StorageBackend::Memory);
                assert!(config.mongodb.is_none());
            },
        );
    }
}
