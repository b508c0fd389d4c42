//! Application services layer.

mod customer_service;

pub use customer_service::{CustomerManager, CustomerService};
