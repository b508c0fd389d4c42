//! Header-based API version negotiation.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};

use common::AppError;

/// Request header naming the requested API version.
pub const API_VERSION_HEADER: &str = "api-version";

/// Response header listing the versions this server speaks.
pub const SUPPORTED_VERSIONS_HEADER: &str = "api-supported-versions";

/// Version assumed when the client does not ask for one.
pub const DEFAULT_API_VERSION: &str = "1.0";

const SUPPORTED_API_VERSIONS: &[&str] = &["1", "1.0"];

/// Check a requested version against the supported set.
pub fn is_supported_version(version: &str) -> bool {
    let version = version.trim();
    SUPPORTED_API_VERSIONS.iter().any(|v| *v == version)
}

/// Reject unsupported `api-version` values and advertise the supported ones.
pub async fn api_version(req: Request, next: Next) -> Response {
    let requested = req
        .headers()
        .get(API_VERSION_HEADER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    let mut response = match requested {
        Some(version) if !is_supported_version(&version) => {
            tracing::debug!(%version, "Rejected unsupported API version");
            AppError::UnsupportedApiVersion(version).into_response()
        }
        _ => next.run(req).await,
    };

    response.headers_mut().insert(
        HeaderName::from_static(SUPPORTED_VERSIONS_HEADER),
        HeaderValue::from_static(DEFAULT_API_VERSION),
    );
    response
}
