//! Wire input for creating and updating events

use super::model::Event;
use crate::core::validation::ValidatablePayload;
use crate::core::validation::validators::not_blank;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event payload accepted by `POST` and `PUT`
///
/// Server-computed fields (`id`, `free`, `offline`, `eventStatus`) are not
/// part of this type and are rejected as unknown properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventDto {
    #[validate(
        required(code = "NotBlank", message = "must not be blank"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(
        required(code = "NotBlank", message = "must not be blank"),
        custom(function = "not_blank")
    )]
    pub description: Option<String>,

    #[validate(required(code = "NotNull", message = "must not be null"))]
    pub begin_enrollment_date_time: Option<NaiveDateTime>,

    #[validate(required(code = "NotNull", message = "must not be null"))]
    pub close_enrollment_date_time: Option<NaiveDateTime>,

    #[validate(required(code = "NotNull", message = "must not be null"))]
    pub begin_event_date_time: Option<NaiveDateTime>,

    #[validate(required(code = "NotNull", message = "must not be null"))]
    pub end_event_date_time: Option<NaiveDateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, code = "Min", message = "must be greater than or equal to 0"))]
    pub base_price: i32,

    #[serde(default)]
    #[validate(range(min = 0, code = "Min", message = "must be greater than or equal to 0"))]
    pub max_price: i32,

    #[serde(default)]
    #[validate(range(min = 0, code = "Min", message = "must be greater than or equal to 0"))]
    pub limit_of_enrollment: i32,
}

impl EventDto {
    /// Overwrite the business fields of a stored event
    ///
    /// `id`, the derived flags and the status are left untouched; callers
    /// run [`Event::update`] afterwards.
    pub fn apply_to(&self, event: &mut Event) {
        if let Some(name) = &self.name {
            event.name = name.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(at) = self.begin_enrollment_date_time {
            event.begin_enrollment_date_time = at;
        }
        if let Some(at) = self.close_enrollment_date_time {
            event.close_enrollment_date_time = at;
        }
        if let Some(at) = self.begin_event_date_time {
            event.begin_event_date_time = at;
        }
        if let Some(at) = self.end_event_date_time {
            event.end_event_date_time = at;
        }
        event.location = self.location.clone();
        event.base_price = self.base_price;
        event.max_price = self.max_price;
        event.limit_of_enrollment = self.limit_of_enrollment;
    }
}

impl ValidatablePayload for EventDto {
    const OBJECT_NAME: &'static str = "eventDto";
}
