//! Route configuration.

use axum::{middleware, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::customer_handler::CUSTOMERS_PATH;
use crate::handlers::{customer_routes, health_routes};
use crate::middleware::{api_version, handle_panic, request_logging};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health check (unversioned)
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Customer routes (versioned)
        .nest(
            CUSTOMERS_PATH,
            customer_routes().layer(middleware::from_fn(api_version)),
        )
        .with_state(state);

    apply_middleware(router)
}

/// Wrap a router in the shared middleware stack.
///
/// Runtime order, outermost first: CORS → Trace → request logging →
/// panic recovery → router.
pub fn apply_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
