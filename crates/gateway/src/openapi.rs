//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::CustomerDto;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "Customer API", version = "1.0"),
    paths(
        crate::handlers::customer_handler::list_customers,
        crate::handlers::customer_handler::get_customer,
        crate::handlers::customer_handler::create_customer,
        crate::handlers::customer_handler::update_customer,
        crate::handlers::customer_handler::delete_customer,
    ),
    components(schemas(CustomerDto)),
    tags(
        (name = "Customers", description = "Customer management endpoints"),
    )
)]
pub struct ApiDoc;
