//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Customer names
// =============================================================================

/// Maximum length (in characters) of any customer name part
pub const MAX_NAME_LENGTH: u32 = 50;

// =============================================================================
// Contact details
// =============================================================================

/// Maximum stored length of an email address
pub const MAX_EMAIL_LENGTH: u32 = 256;

/// Maximum stored length of a phone number
pub const MAX_PHONE_LENGTH: u32 = 32;

// =============================================================================
// Validation messages
// =============================================================================

/// Message reported by [`validate_phone`](crate::validate_phone)
pub const INVALID_PHONE_MESSAGE: &str = "Invalid Phone Number";
