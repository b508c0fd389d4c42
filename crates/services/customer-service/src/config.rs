//! Customer service configuration.

use std::env;

use common::{DatabaseConfig, DEFAULT_DATABASE_URL};

/// Customer service configuration.
#[derive(Debug, Clone, Default)]
pub struct CustomerServiceConfig {
    /// Backing store settings
    pub database: DatabaseConfig,
}

impl CustomerServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("CUSTOMER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }

    /// Configuration for a fresh private in-memory store.
    pub fn in_memory() -> Self {
        Self::default()
    }
}
