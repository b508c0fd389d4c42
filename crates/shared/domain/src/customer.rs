//! Customer domain entity, its transfer object, and the mapping between them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_phone;

/// Customer domain entity.
///
/// The identifier is always supplied by the caller; it is never generated
/// on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub customer_id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// Overwrite every mutable field with the values carried by `dto`.
    ///
    /// The identifier is left untouched.
    pub fn apply(&mut self, dto: CustomerDto) {
        self.first_name = dto.first_name;
        self.middle_name = dto.middle_name;
        self.last_name = dto.last_name;
        self.email = dto.email;
        self.phone = dto.phone;
    }
}

/// Customer as exposed across the API boundary.
///
/// Field-for-field identical to [`Customer`] today, but the wire format is
/// free to diverge from the storage shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    /// Client-supplied unique identifier
    #[cfg_attr(feature = "openapi", schema(example = "6f1c2f3e-8a7b-4d2c-9e51-0b3f1d2a4c5e"))]
    pub customer_id: Uuid,
    #[validate(length(min = 2, max = 50, message = "First Name must be between 2 and 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Ada"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 50, message = "Middle Name must be between 2 and 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Augusta"))]
    pub middle_name: Option<String>,
    #[validate(length(min = 2, max = 50, message = "Last Name must be between 2 and 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Lovelace"))]
    pub last_name: String,
    #[validate(email(message = "Invalid Email Address"))]
    #[cfg_attr(feature = "openapi", schema(example = "ada@example.com"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    #[cfg_attr(feature = "openapi", schema(example = "+44 20 7946 0958"))]
    pub phone: String,
}

impl From<CustomerDto> for Customer {
    fn from(dto: CustomerDto) -> Self {
        Self {
            customer_id: dto.customer_id,
            first_name: dto.first_name,
            middle_name: dto.middle_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            first_name: customer.first_name,
            middle_name: customer.middle_name,
            last_name: customer.last_name,
            email: customer.email,
            phone: customer.phone,
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self::from(customer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> CustomerDto {
        CustomerDto {
            customer_id: Uuid::new_v4(),
            first_name: "Grace".to_string(),
            middle_name: Some("Brewster".to_string()),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "+1 (555) 010-4477".to_string(),
        }
    }

    #[test]
    fn mapping_preserves_every_field() {
        let dto = sample_dto();
        let customer = Customer::from(dto.clone());

        assert_eq!(customer.customer_id, dto.customer_id);
        assert_eq!(customer.middle_name.as_deref(), Some("Brewster"));
        assert_eq!(CustomerDto::from(&customer), dto);
    }

    #[test]
    fn apply_overwrites_fields_but_keeps_identifier() {
        let mut customer = Customer::from(sample_dto());
        let original_id = customer.customer_id;

        let mut changes = sample_dto();
        changes.first_name = "Anita".to_string();
        changes.middle_name = None;
        changes.email = "anita@example.com".to_string();

        customer.apply(changes);

        assert_eq!(customer.customer_id, original_id);
        assert_eq!(customer.first_name, "Anita");
        assert_eq!(customer.middle_name, None);
        assert_eq!(customer.email, "anita@example.com");
        assert_eq!(customer.last_name, "Hopper");
    }

    #[test]
    fn dto_uses_camel_case_on_the_wire() {
        let mut dto = sample_dto();
        dto.middle_name = None;

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["customerId"], dto.customer_id.to_string());
        assert_eq!(json["firstName"], "Grace");
        assert!(json["middleName"].is_null());
        assert_eq!(json["lastName"], "Hopper");
    }
}
