//! Paged collection representation with navigation links

use super::registry::RouteRegistry;
use crate::core::{Links, Page, PageRequest, rel};
use serde::Serialize;
use std::collections::BTreeMap;

/// Paging metadata rendered under `page`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub number: usize,
}

/// A page of resources embedded under a collection relation
#[derive(Debug, Clone, Serialize)]
pub struct PagedResource<R> {
    #[serde(rename = "_embedded", skip_serializing_if = "BTreeMap::is_empty")]
    pub embedded: BTreeMap<String, Vec<R>>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub page: PageMetadata,
}

impl<R> PagedResource<R> {
    /// Assemble a collection resource from a store page
    ///
    /// Navigation links follow the request's size and sort. `first` and
    /// `last` only appear when there is somewhere to navigate to; `prev`
    /// and `next` only when those pages exist.
    pub fn from_page(
        page: Page<R>,
        request: &PageRequest,
        routes: &RouteRegistry,
        collection_rel: &str,
    ) -> Self {
        let metadata = PageMetadata {
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            number: page.number,
        };
        let has_previous = page.has_previous();
        let has_next = page.has_next();

        let mut links = Links::new();
        if has_previous || has_next {
            links.add(rel::FIRST, routes.events_page(&request.at_page(0)));
        }
        if has_previous {
            links.add(rel::PREV, routes.events_page(&request.at_page(page.number - 1)));
        }
        links.add(rel::SELF, routes.events_page(request));
        if has_next && let Some(next) = page.number.checked_add(1) {
            links.add(rel::NEXT, routes.events_page(&request.at_page(next)));
        }
        if has_previous || has_next {
            let last = metadata.total_pages.saturating_sub(1);
            links.add(rel::LAST, routes.events_page(&request.at_page(last)));
        }

        let mut embedded = BTreeMap::new();
        if !page.content.is_empty() {
            embedded.insert(collection_rel.to_string(), page.content);
        }

        Self {
            embedded,
            links,
            page: metadata,
        }
    }

    pub fn add_link(&mut self, rel: &str, href: impl Into<String>) -> &mut Self {
        self.links.add(rel, href);
        self
    }
}
