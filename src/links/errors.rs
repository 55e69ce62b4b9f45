//! Hypermedia representation of validation failures

use crate::core::validation::{ErrorEntry, Errors};
use crate::core::{Links, rel};
use serde::Serialize;

/// Body of every 400 response
///
/// ```json
/// {
///   "errors": [ { "objectName": "eventDto", "code": "wrongPrices", ... } ],
///   "_links": { "index": { "href": "/api" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorsResource {
    pub errors: Vec<ErrorEntry>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl ErrorsResource {
    /// Wrap the errors and point the client back at the API index
    pub fn new(errors: Errors, index_href: impl Into<String>) -> Self {
        Self {
            errors: errors.into_entries(),
            links: Links::new().with(rel::INDEX, index_href),
        }
    }
}
