//! Customer repository backed by a relational store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use super::entities::customer::{ActiveModel, Entity as CustomerEntity};
use common::{AppError, AppResult};
use domain::Customer;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// Every customer handed out is an owned, detached copy: changing it has no
/// effect on storage until it is passed back to [`update`](Self::update).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List every customer in store order
    async fn list(&self) -> AppResult<Vec<Customer>>;

    /// Find customer by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>>;

    /// Insert a new customer under its caller-supplied ID
    async fn add(&self, customer: Customer) -> AppResult<()>;

    /// Replace every mutable column of an existing customer
    async fn update(&self, customer: Customer) -> AppResult<()>;

    /// Delete customer by ID; a missing ID is not an error
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CustomerRepository
pub struct CustomerStore {
    db: DatabaseConnection,
}

impl CustomerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn list(&self) -> AppResult<Vec<Customer>> {
        let models = CustomerEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let result = CustomerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Customer::from))
    }

    async fn add(&self, customer: Customer) -> AppResult<()> {
        // Duplicate IDs and emails are rejected by the store's constraints
        CustomerEntity::insert(ActiveModel::for_insert(customer))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn update(&self, customer: Customer) -> AppResult<()> {
        ActiveModel::for_replace(customer)
            .update(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = CustomerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            tracing::debug!(customer_id = %id, "Delete of unknown customer ignored");
        }

        Ok(())
    }
}
