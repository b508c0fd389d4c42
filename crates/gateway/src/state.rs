//! Application state for dependency injection.

use std::sync::Arc;

use customer_service_lib::infra::Database;
use customer_service_lib::service::CustomerService;
use customer_service_lib::CustomerModule;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<dyn CustomerService>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(customer_service: Arc<dyn CustomerService>, database: Arc<Database>) -> Self {
        Self {
            customer_service,
            database,
        }
    }
}

impl From<CustomerModule> for AppState {
    fn from(module: CustomerModule) -> Self {
        Self::new(module.service, module.database)
    }
}
