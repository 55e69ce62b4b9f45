//! Entity trait defining the core abstraction for persisted resources

use std::cmp::Ordering;

/// Base trait for all entities managed by a store.
///
/// Entities carry a numeric identity that the store assigns on first save.
/// The trait also describes how entities are exposed over HTTP (resource
/// names) and how they can be ordered when a page is requested.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "events")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "event")
    fn resource_name_singular() -> &'static str;

    /// Get the identifier, `None` until the entity has been saved
    fn id(&self) -> Option<i64>;

    /// Assign the identifier. Stores call this once, on creation.
    fn assign_id(&mut self, id: i64);

    /// Properties accepted in a `sort` query parameter
    fn sortable_fields() -> &'static [&'static str];

    /// Compare two entities on a sortable property
    ///
    /// Unknown properties compare as equal.
    fn compare_field(&self, other: &Self, field: &str) -> Ordering;

    // === Utility Methods ===

    /// Relation name under which a collection of this entity is embedded
    fn collection_rel() -> String {
        format!("{}List", Self::resource_name_singular())
    }

    /// Check whether the entity has not been persisted yet
    fn is_new(&self) -> bool {
        self.id().is_none()
    }

    /// Check whether a property can be used for sorting
    fn is_sortable(field: &str) -> bool {
        Self::sortable_fields().contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestEntity {
        id: Option<i64>,
        name: String,
    }

    impl Entity for TestEntity {
        fn resource_name() -> &'static str {
            "test_entities"
        }

        fn resource_name_singular() -> &'static str {
            "testEntity"
        }

        fn id(&self) -> Option<i64> {
            self.id
        }

        fn assign_id(&mut self, id: i64) {
            self.id = Some(id);
        }

        fn sortable_fields() -> &'static [&'static str] {
            &["id", "name"]
        }

        fn compare_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "id" => self.id.cmp(&other.id),
                "name" => self.name.cmp(&other.name),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_entity_is_new_until_assigned() {
        let mut entity = TestEntity {
            id: None,
            name: "a".to_string(),
        };
        assert!(entity.is_new());

        entity.assign_id(7);
        assert!(!entity.is_new());
        assert_eq!(entity.id(), Some(7));
    }

    #[test]
    fn test_collection_rel() {
        assert_eq!(TestEntity::collection_rel(), "testEntityList");
    }

    #[test]
    fn test_is_sortable() {
        assert!(TestEntity::is_sortable("name"));
        assert!(!TestEntity::is_sortable("password"));
    }
}
