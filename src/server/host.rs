//! Server host holding the shared application state
//!
//! The host is built once by the [`ServerBuilder`](super::ServerBuilder) and
//! handed to every handler as axum state behind an `Arc`.

use crate::config::AppConfig;
use crate::core::{ApiError, EntityStore, Errors};
use crate::entities::account::{AccountService, AccountStore};
use crate::entities::event::{Event, EventValidator};
use crate::links::{ErrorsResource, RouteRegistry};
use std::sync::Arc;

/// State shared by all handlers
pub type AppState = Arc<ServerHost>;

/// Host context containing all application state
pub struct ServerHost {
    /// Effective configuration
    pub config: AppConfig,

    /// Href resolution for every hypermedia link
    pub routes: RouteRegistry,

    pub event_store: Arc<dyn EntityStore<Event>>,

    pub account_service: AccountService,

    /// Cross-field rules checked on every event payload
    pub event_validator: EventValidator,
}

impl ServerHost {
    pub fn new(
        config: AppConfig,
        event_store: Arc<dyn EntityStore<Event>>,
        account_store: Arc<dyn AccountStore>,
    ) -> Self {
        let routes = RouteRegistry::new(&config.api);

        Self {
            config,
            routes,
            event_store,
            account_service: AccountService::new(account_store),
            event_validator: EventValidator::new(),
        }
    }

    /// Turn accumulated errors into a 400 errors resource
    pub fn bad_request(&self, errors: Errors) -> ApiError {
        ApiError::Validation(ErrorsResource::new(errors, self.routes.index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::storage::{InMemoryAccountStore, InMemoryEntityStore};

    fn make_host(config: AppConfig) -> ServerHost {
        ServerHost::new(
            config,
            Arc::new(InMemoryEntityStore::new()),
            Arc::new(InMemoryAccountStore::new()),
        )
    }

    #[test]
    fn test_routes_follow_api_config() {
        let host = make_host(AppConfig {
            api: ApiConfig {
                base_url: "http://events.test".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        assert_eq!(host.routes.events(), "http://events.test/api/events");
    }

    #[test]
    fn test_bad_request_links_to_index() {
        let host = make_host(AppConfig::default());
        let mut errors = Errors::new("eventDto");
        errors.reject("wrongPrices", "wrong");

        match host.bad_request(errors) {
            ApiError::Validation(resource) => {
                assert_eq!(resource.errors.len(), 1);
                assert_eq!(resource.links.get("index").unwrap().href, "/api");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
