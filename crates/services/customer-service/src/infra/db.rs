//! Database connection and initialization.

use std::time::Duration;

use common::DatabaseConfig;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;

use super::migrations::Migrator;

/// Lifetime of the single in-memory connection. Recycling it would drop
/// every stored customer.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Initialize database connection and run migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(connect_options(config)).await?;

        // Run pending migrations
        Migrator::up(&connection, None).await?;
        tracing::info!(in_memory = config.is_in_memory(), "Database connected and migrations applied");

        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

/// Build pool options; an in-memory store is pinned to one connection.
fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());

    if config.is_in_memory() {
        options
            .max_connections(1)
            .min_connections(1)
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
    } else {
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);
    }

    options
}
