//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::validation::{field_violations, FieldViolation};

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// One or more fields broke their validation rules
    #[error("{} field(s) failed validation", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::InvalidFields(field_violations(&errors))
    }
}
