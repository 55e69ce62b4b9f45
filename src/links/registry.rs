//! Route registry for hypermedia links
//!
//! Provides resolution of API routes to absolute hrefs and of resource
//! operations to their documentation anchors.

use crate::config::ApiConfig;
use crate::core::PageRequest;

/// Documented operation a `profile` link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    EventsCreate,
    EventsList,
    EventsGet,
    EventsUpdate,
}

impl Profile {
    /// Anchor of the operation inside the API documentation
    pub fn anchor(&self) -> &'static str {
        match self {
            Profile::EventsCreate => "resources-events-create",
            Profile::EventsList => "resources-events-list",
            Profile::EventsGet => "resources-events-get",
            Profile::EventsUpdate => "resources-events-update",
        }
    }
}

/// Registry resolving routes to hrefs
///
/// Axum route patterns live here too, so that the router and the links it
/// renders cannot drift apart.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    base_url: String,
    docs_path: String,
}

impl RouteRegistry {
    pub const INDEX: &'static str = "/api";
    pub const EVENTS: &'static str = "/api/events";
    pub const EVENT: &'static str = "/api/events/{id}";

    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            docs_path: config.docs_path.clone(),
        }
    }

    /// Prefix a path with the configured base URL
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn index(&self) -> String {
        self.href(Self::INDEX)
    }

    pub fn events(&self) -> String {
        self.href(Self::EVENTS)
    }

    pub fn event(&self, id: i64) -> String {
        format!("{}/{}", self.events(), id)
    }

    /// Collection href carrying the paging parameters of a request
    pub fn events_page(&self, request: &PageRequest) -> String {
        let mut href = format!(
            "{}?page={}&size={}",
            self.events(),
            request.page,
            request.size
        );
        if let Some(sort) = &request.sort {
            href.push_str(&format!("&sort={sort}"));
        }
        href
    }

    pub fn profile(&self, profile: Profile) -> String {
        format!("{}#{}", self.href(&self.docs_path), profile.anchor())
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}
