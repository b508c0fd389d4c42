//! Middleware for request logging, panic recovery, and API versioning.

mod api_version;
mod exception_handling;
mod request_logging;

pub use api_version::{
    api_version, is_supported_version, API_VERSION_HEADER, DEFAULT_API_VERSION,
    SUPPORTED_VERSIONS_HEADER,
};
pub use exception_handling::handle_panic;
pub use request_logging::request_logging;
