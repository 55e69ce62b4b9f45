//! Event resource: entity, input payload, business rules and handlers

pub mod dto;
pub mod handlers;
pub mod model;
pub mod validator;

pub use dto::EventDto;
pub use handlers::{EventResource, create_event, get_event, query_events, update_event};
pub use model::{Event, EventStatus};
pub use validator::EventValidator;
