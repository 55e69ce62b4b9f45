//! Single-entity hypermedia representation

use crate::core::Links;
use serde::Serialize;

/// An entity's fields plus its `_links`
///
/// The content is flattened, so the entity's own fields appear at the top
/// level of the JSON object next to `_links`.
#[derive(Debug, Clone, Serialize)]
pub struct EntityResource<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> EntityResource<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            links: Links::new(),
        }
    }

    pub fn add_link(&mut self, rel: &str, href: impl Into<String>) -> &mut Self {
        self.links.add(rel, href);
        self
    }

    pub fn with_link(mut self, rel: &str, href: impl Into<String>) -> Self {
        self.links.add(rel, href);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rel;
    use serde_json::json;

    #[derive(Serialize)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn test_content_is_flattened_next_to_links() {
        let resource = EntityResource::new(Item {
            id: 1,
            name: "Spring".to_string(),
        })
        .with_link(rel::SELF, "/api/events/1");

        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({
                "id": 1,
                "name": "Spring",
                "_links": { "self": { "href": "/api/events/1" } }
            })
        );
    }
}
