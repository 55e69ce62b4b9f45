//! Hypermedia module
//!
//! This module renders resources as HAL documents: entity representations
//! with `_links`, paged collections with `_embedded` items and navigation,
//! and errors resources pointing back at the API index.

pub mod errors;
pub mod index;
pub mod paged;
pub mod registry;
pub mod resource;

pub use errors::ErrorsResource;
pub use index::{IndexResource, index};
pub use paged::{PageMetadata, PagedResource};
pub use registry::{Profile, RouteRegistry};
pub use resource::EntityResource;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Media type of every hypermedia response
pub const HAL_JSON: &str = "application/hal+json";

/// Response wrapper serializing its body as `application/hal+json`
#[derive(Debug, Clone)]
pub struct Hal<T>(pub T);

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, HAL_JSON)], body).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize hypermedia response");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
