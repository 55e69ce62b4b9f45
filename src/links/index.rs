//! API entry point

use super::Hal;
use crate::core::{Links, rel};
use crate::server::AppState;
use axum::extract::State;
use serde::Serialize;

/// Body of `GET /api`: nothing but links to the top-level resources
#[derive(Debug, Clone, Serialize)]
pub struct IndexResource {
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Handler for `GET /api`
pub async fn index(State(state): State<AppState>) -> Hal<IndexResource> {
    Hal(IndexResource {
        links: Links::new().with(rel::EVENTS, state.routes.events()),
    })
}
