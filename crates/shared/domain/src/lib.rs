//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The customer entity, its transfer object and the validation rules that
//! guard the API boundary all live here.

pub mod constants;
pub mod customer;
pub mod error;
pub mod validation;

pub use constants::*;
pub use customer::{Customer, CustomerDto};
pub use error::DomainError;
pub use validation::{field_violations, validate_phone, FieldViolation};
