//! Customer handlers.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::CustomerDto;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Mount point of the customer routes.
pub const CUSTOMERS_PATH: &str = "/api/v1/customers";

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

/// List all customers
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "Every stored customer", body = Vec<CustomerDto>)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<CustomerDto>>> {
    let customers = state.customer_service.get_all_customers().await?;
    info!(count = customers.len(), "Listed customers");
    Ok(Json(customers))
}

/// Get customer by ID
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerDto),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CustomerDto>> {
    let customer = state
        .customer_service
        .get_customer(id)
        .await?
        .ok_or_not_found()?;
    Ok(Json(customer))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "Customers",
    request_body = CustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto,
            headers(("Location" = String, description = "URL of the new customer"))),
        (status = 400, description = "Missing or invalid customer")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CustomerDto>,
) -> AppResult<impl IntoResponse> {
    state.customer_service.add_customer(dto.clone()).await?;
    info!(customer_id = %dto.customer_id, "Customer created");

    let location = format!("{}/{}", CUSTOMERS_PATH, dto.customer_id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)))
}

/// Replace a customer
#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    request_body = CustomerDto,
    responses(
        (status = 204, description = "Customer updated"),
        (status = 400, description = "Invalid customer or ID mismatch"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CustomerDto>,
) -> AppResult<StatusCode> {
    if dto.customer_id != id {
        return Err(AppError::bad_request(format!(
            "Customer ID {} in the body does not match {} in the path",
            dto.customer_id, id
        )));
    }

    state
        .customer_service
        .get_customer(id)
        .await?
        .ok_or_not_found()?;

    state.customer_service.update_customer(dto).await?;
    info!(customer_id = %id, "Customer updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state
        .customer_service
        .get_customer(id)
        .await?
        .ok_or_not_found()?;

    state.customer_service.delete_customer(id).await?;
    info!(customer_id = %id, "Customer deleted");

    Ok(StatusCode::NO_CONTENT)
}
