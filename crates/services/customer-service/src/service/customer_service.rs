//! Customer service - DTO-level customer use cases.
//!
//! Sits between the HTTP layer and the repository; projects between
//! `CustomerDto` and the `Customer` entity in both directions.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::AppResult;
use domain::{Customer, CustomerDto, DomainError};

use crate::repository::CustomerRepository;

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// List all customers
    async fn get_all_customers(&self) -> AppResult<Vec<CustomerDto>>;

    /// Get customer by ID; `None` if it does not exist
    async fn get_customer(&self, id: Uuid) -> AppResult<Option<CustomerDto>>;

    /// Add a new customer
    async fn add_customer(&self, dto: CustomerDto) -> AppResult<()>;

    /// Replace an existing customer's fields.
    ///
    /// Fails with `AppError::NotFound` if no customer has `dto.customer_id`.
    async fn update_customer(&self, dto: CustomerDto) -> AppResult<()>;

    /// Delete customer by ID; a missing ID is not an error
    async fn delete_customer(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CustomerService using repository.
pub struct CustomerManager {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerManager {
    /// Create new customer service instance with repository
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn get_all_customers(&self) -> AppResult<Vec<CustomerDto>> {
        let customers = self.repo.list().await?;
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    async fn get_customer(&self, id: Uuid) -> AppResult<Option<CustomerDto>> {
        Ok(self.repo.find_by_id(id).await?.map(CustomerDto::from))
    }

    async fn add_customer(&self, dto: CustomerDto) -> AppResult<()> {
        self.repo.add(Customer::from(dto)).await
    }

    async fn update_customer(&self, dto: CustomerDto) -> AppResult<()> {
        let mut customer = self
            .repo
            .find_by_id(dto.customer_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Customer {}", dto.customer_id)))?;

        customer.apply(dto);
        self.repo.update(customer).await
    }

    async fn delete_customer(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
