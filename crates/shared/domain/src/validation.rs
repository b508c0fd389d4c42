//! Explicit validation pass for inbound customer data.
//!
//! Rules are declared with `validator` attributes on [`CustomerDto`](crate::CustomerDto);
//! this module turns the resulting errors into a flat, ordered list of
//! field/message pairs that the API layer can hand back to clients.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::constants::INVALID_PHONE_MESSAGE;

/// Extension markers, tried in order.
const EXTENSION_MARKERS: [&str; 3] = ["ext.", "ext", "x"];

/// Separators allowed between phone digits besides whitespace.
const PHONE_SEPARATORS: &str = "-.()";

/// A single broken validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldViolation {
    /// Wire (camelCase) name of the offending field
    pub field: String,
    /// Human readable explanation
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten `validator` errors into field violations, sorted by field name.
pub fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", to_camel_case(field)));
                FieldViolation::new(to_camel_case(field), message)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

/// Phone syntax check used by the `custom` validator on `CustomerDto::phone`.
///
/// `+` signs are ignored and a trailing extension (`ext.`, `ext` or `x`
/// followed by digits) is dropped. What remains needs at least one digit
/// and may otherwise hold only digits, whitespace and `-.()`.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let without_plus = phone.replace('+', "");
    let number = strip_extension(without_plus.trim_end());

    let has_digit = number.chars().any(|c| c.is_ascii_digit());
    let allowed = number
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || PHONE_SEPARATORS.contains(c));

    if has_digit && allowed {
        return Ok(());
    }

    let mut error = ValidationError::new("phone");
    error.message = Some(Cow::Borrowed(INVALID_PHONE_MESSAGE));
    Err(error)
}

/// Drop the last extension marker when only digits follow it.
fn strip_extension(phone: &str) -> &str {
    // ASCII lowercasing keeps byte offsets valid for `phone`
    let lower = phone.to_ascii_lowercase();

    for marker in EXTENSION_MARKERS {
        if let Some(idx) = lower.rfind(marker) {
            let extension = phone[idx + marker.len()..].trim_start();
            if !extension.is_empty() && extension.chars().all(|c| c.is_ascii_digit()) {
                return &phone[..idx];
            }
        }
    }

    phone
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use validator::Validate;

    use super::*;
    use crate::CustomerDto;

    fn valid_dto() -> CustomerDto {
        CustomerDto {
            customer_id: Uuid::new_v4(),
            first_name: "Linus".to_string(),
            middle_name: None,
            last_name: "Torvalds".to_string(),
            email: "linus@example.org".to_string(),
            phone: "555-867-5309".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_customer() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn reports_each_broken_field_with_its_message() {
        let mut dto = valid_dto();
        dto.first_name = "L".to_string();
        dto.middle_name = Some("x".repeat(51));
        dto.last_name = String::new();
        dto.email = "not-an-email".to_string();
        dto.phone = "call me".to_string();

        let errors = dto.validate().unwrap_err();
        let violations = field_violations(&errors);

        assert_eq!(
            violations,
            vec![
                FieldViolation::new("email", "Invalid Email Address"),
                FieldViolation::new("firstName", "First Name must be between 2 and 50 characters"),
                FieldViolation::new("lastName", "Last Name must be between 2 and 50 characters"),
                FieldViolation::new("middleName", "Middle Name must be between 2 and 50 characters"),
                FieldViolation::new("phone", INVALID_PHONE_MESSAGE),
            ]
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut dto = valid_dto();
        dto.first_name = "é".repeat(50);

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn absent_middle_name_is_allowed() {
        let mut dto = valid_dto();
        dto.middle_name = None;
        assert!(dto.validate().is_ok());

        dto.middle_name = Some("Bo".to_string());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn phone_syntax() {
        assert!(validate_phone("+1 (555) 010-4477").is_ok());
        assert!(validate_phone("020.7946.0958").is_ok());
        assert!(validate_phone("++15550104477").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("+").is_err());
        assert!(validate_phone("555-CALL-NOW").is_err());
        assert!(validate_phone("555/0104").is_err());
    }

    #[test]
    fn short_numbers_are_accepted() {
        assert!(validate_phone("911").is_ok());
        assert!(validate_phone("12345").is_ok());
        assert!(validate_phone("1").is_ok());
    }

    #[test]
    fn trailing_extensions_are_accepted() {
        assert!(validate_phone("1-770-736-8031 x56442").is_ok());
        assert!(validate_phone("(555) 555-5555 x123").is_ok());
        assert!(validate_phone("555.555.5555 ext. 12").is_ok());
        assert!(validate_phone("555.555.5555 EXT 12").is_ok());
        assert!(validate_phone("555-0100x7").is_ok());
    }

    #[test]
    fn malformed_extensions_are_rejected() {
        // Marker with nothing or non-digits after it stays part of the number
        assert!(validate_phone("555-0100 x").is_err());
        assert!(validate_phone("555-0100 ext. 12a").is_err());
        assert!(validate_phone("x123").is_err());
    }

    #[test]
    fn generated_style_phone_passes_dto_validation() {
        let mut dto = valid_dto();
        dto.phone = "1-770-736-8031 x56442".to_string();

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(to_camel_case("customer_id"), "customerId");
        assert_eq!(to_camel_case("email"), "email");
    }
}
