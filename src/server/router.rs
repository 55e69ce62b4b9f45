//! Router assembly

use super::host::AppState;
use crate::entities::event::{create_event, get_event, query_events, update_event};
use crate::links::{RouteRegistry, index};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// Build the complete application router
///
/// - `GET /api` - API index
/// - `GET|POST /api/events` - list and create events
/// - `GET|PUT /api/events/{id}` - read and update one event
/// - `GET /health`, `GET /healthz` - liveness
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(RouteRegistry::INDEX, get(index))
        .route(
            RouteRegistry::EVENTS,
            get(query_events).post(create_event),
        )
        .route(RouteRegistry::EVENT, get(get_event).put(update_event))
        .with_state(state);

    health_routes()
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "learn-rest-api"
    }))
}
