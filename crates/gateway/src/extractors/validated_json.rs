//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;
use domain::DomainError;

/// JSON extractor that automatically validates the payload.
///
/// A missing or malformed body is a 400 with the parser's message; a body
/// that parses but breaks a field rule is a 400 listing every violation.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        // Validate
        value
            .validate()
            .map_err(|e| AppError::from(DomainError::from(e)))?;

        Ok(ValidatedJson(value))
    }
}
