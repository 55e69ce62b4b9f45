//! Macros for reducing boilerplate when defining entities
//!
//! These macros generate the repetitive `Entity` trait implementation needed
//! for each stored resource type.

/// Implement [`Entity`](crate::core::Entity) for a struct with an
/// `id: Option<i64>` field
///
/// The `sort` block maps each property accepted in a `sort` query parameter
/// to the struct field it orders by. Every listed field must be `Ord`.
///
/// # Example
/// ```rust,ignore
/// impl_entity!(Event, "events", "event", sort {
///     "id" => id,
///     "name" => name,
///     "basePrice" => base_price,
/// });
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $plural:expr, $singular:expr, sort { $($prop:literal => $field:ident),+ $(,)? }) => {
        impl $crate::core::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> Option<i64> {
                self.id
            }

            fn assign_id(&mut self, id: i64) {
                self.id = Some(id);
            }

            fn sortable_fields() -> &'static [&'static str] {
                &[$($prop),+]
            }

            fn compare_field(&self, other: &Self, field: &str) -> ::std::cmp::Ordering {
                match field {
                    $($prop => self.$field.cmp(&other.$field),)+
                    _ => ::std::cmp::Ordering::Equal,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Entity;
    use std::cmp::Ordering;

    #[derive(Clone, Debug)]
    struct Ticket {
        id: Option<i64>,
        title: String,
        seats: u32,
    }

    impl_entity!(Ticket, "tickets", "ticket", sort {
        "id" => id,
        "title" => title,
        "seats" => seats,
    });

    fn ticket(id: i64, title: &str, seats: u32) -> Ticket {
        Ticket {
            id: Some(id),
            title: title.to_string(),
            seats,
        }
    }

    #[test]
    fn test_generated_names() {
        assert_eq!(Ticket::resource_name(), "tickets");
        assert_eq!(Ticket::collection_rel(), "ticketList");
        assert_eq!(Ticket::sortable_fields(), &["id", "title", "seats"]);
    }

    #[test]
    fn test_generated_compare_field() {
        let a = ticket(1, "b", 10);
        let b = ticket(2, "a", 10);
        assert_eq!(a.compare_field(&b, "id"), Ordering::Less);
        assert_eq!(a.compare_field(&b, "title"), Ordering::Greater);
        assert_eq!(a.compare_field(&b, "seats"), Ordering::Equal);
        assert_eq!(a.compare_field(&b, "unknown"), Ordering::Equal);
    }

    #[test]
    fn test_generated_id_assignment() {
        let mut t = Ticket {
            id: None,
            title: "x".to_string(),
            seats: 0,
        };
        assert!(t.is_new());
        t.assign_id(5);
        assert_eq!(t.id(), Some(5));
    }
}
