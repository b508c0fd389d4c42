//! Request/response logging middleware.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{error, info};

use common::internal_error_response;

/// Log method, path and UTC time on the way in, status and time on the way out.
///
/// The response body is buffered so its size can be logged, then forwarded
/// byte-for-byte.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    info!(
        %method,
        %path,
        at = %Utc::now().to_rfc3339(),
        "Request received"
    );

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(%method, %path, error = %e, "Failed to buffer response body");
            return internal_error_response();
        }
    };

    info!(
        %method,
        %path,
        status = parts.status.as_u16(),
        body_bytes = bytes.len(),
        at = %Utc::now().to_rfc3339(),
        "Response sent"
    );

    Response::from_parts(parts, Body::from(bytes))
}
