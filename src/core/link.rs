//! Hypermedia links and named link sets

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Well-known relation names
pub mod rel {
    pub const SELF: &str = "self";
    pub const PROFILE: &str = "profile";
    pub const INDEX: &str = "index";
    pub const EVENTS: &str = "events";
    pub const QUERY_EVENTS: &str = "query-events";
    pub const UPDATE_EVENT: &str = "update-event";
    pub const FIRST: &str = "first";
    pub const PREV: &str = "prev";
    pub const NEXT: &str = "next";
    pub const LAST: &str = "last";
}

/// A single hypermedia link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// An ordered set of links keyed by relation name
///
/// Serializes as a map `{ "<rel>": { "href": "..." } }` in insertion order.
/// Adding a relation that already exists replaces its link in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    entries: Vec<(String, Link)>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the link for a relation
    pub fn add(&mut self, rel: impl Into<String>, href: impl Into<String>) -> &mut Self {
        let rel = rel.into();
        let link = Link::new(href);
        match self.entries.iter_mut().find(|(r, _)| *r == rel) {
            Some((_, existing)) => *existing = link,
            None => self.entries.push((rel, link)),
        }
        self
    }

    /// Builder-style variant of [`Links::add`]
    pub fn with(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.add(rel, href);
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.entries.iter().find(|(r, _)| r == rel).map(|(_, l)| l)
    }

    /// Relation names in insertion order
    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(r, _)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rel, link) in &self.entries {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}
