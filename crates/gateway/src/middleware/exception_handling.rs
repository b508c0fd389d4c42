//! Panic recovery for the whole router.
//!
//! Errors returned by handlers are turned into responses by `AppError`
//! itself; this covers the handlers that never got that far.

use std::any::Any;

use axum::response::Response;
use tracing::error;

use common::internal_error_response;

/// Response for a panicking handler, used with `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };

    error!(panic = %detail, "Request handler panicked");
    internal_error_response()
}
