//! Axum extractor for validated request bodies
//!
//! This module provides the `Validated<T>` extractor that decodes a JSON body
//! and runs its declarative constraints before the handler is called. Any
//! failure short-circuits with a 400 errors resource.

use super::errors::Errors;
use crate::core::error::ApiError;
use crate::server::AppState;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Trait for request payloads that support declarative validation
pub trait ValidatablePayload: DeserializeOwned + Validate {
    /// Name reported as `objectName` in error entries
    const OBJECT_NAME: &'static str;
}

/// Axum extractor that decodes and validates a JSON payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_event(
///     State(state): State<AppState>,
///     Validated(dto): Validated<EventDto>,
/// ) -> Result<Response, ApiError> {
///     // dto already passed its declarative constraints
/// }
/// ```
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<T> FromRequest<AppState> for Validated<T>
where
    T: ValidatablePayload + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let mut errors = Errors::new(T::OBJECT_NAME);

        let payload = match Json::<T>::from_request(req, state).await {
            Ok(Json(payload)) => payload,
            Err(rejection) => {
                tracing::warn!(object = T::OBJECT_NAME, error = %rejection.body_text(), "rejected undecodable payload");
                errors.reject("invalidPayload", rejection.body_text());
                return Err(state.bad_request(errors));
            }
        };

        if let Err(failures) = payload.validate() {
            errors.add_field_failures(&failures);
            tracing::warn!(
                object = T::OBJECT_NAME,
                count = errors.error_count(),
                "payload failed declarative validation"
            );
            return Err(state.bad_request(errors));
        }

        Ok(Validated(payload))
    }
}
