//! Customer Service Library
//!
//! This crate provides customer management: the storage schema, the
//! repository over it, and the DTO-level service the HTTP layer talks to.
//! It runs in-process inside the gateway binary.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DbErr;
use tracing::info;

use crate::config::CustomerServiceConfig;
use crate::infra::Database;
use crate::repository::CustomerStore;
use crate::service::{CustomerManager, CustomerService};

/// Wired-up customer module: the database handle plus the service on top.
#[derive(Clone)]
pub struct CustomerModule {
    pub database: Arc<Database>,
    pub service: Arc<dyn CustomerService>,
}

/// Connect to the configured store, apply migrations, and build the service.
pub async fn connect(config: &CustomerServiceConfig) -> Result<CustomerModule, DbErr> {
    // Initialize database
    let database = Arc::new(Database::connect(&config.database).await?);

    // Create repository and service
    let customer_repo = Arc::new(CustomerStore::new(database.get_connection()));
    let service: Arc<dyn CustomerService> = Arc::new(CustomerManager::new(customer_repo));

    info!(in_memory = config.database.is_in_memory(), "Customer module ready");
    Ok(CustomerModule { database, service })
}
