//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServiceStatus,
}

/// Individual service status.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub database: ServiceHealth,
}

/// Error reported when the database ping fails.
const DATABASE_UNREACHABLE: &str = "database unreachable";

/// Service health with optional error message.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies database connectivity.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = database_health(state.database.ping().await);

    let all_healthy = database.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        services: ServiceStatus {
            database,
        },
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}

/// Map a ping result to a status; the driver error is only logged.
fn database_health<E: std::fmt::Display>(ping: Result<(), E>) -> ServiceHealth {
    match ping {
        Ok(()) => ServiceHealth {
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            ServiceHealth {
                status: "unhealthy".to_string(),
                error: Some(DATABASE_UNREACHABLE),
            }
        }
    }
}
