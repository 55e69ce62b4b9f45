//! Event entity

use super::dto::EventDto;
use crate::impl_entity;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    #[default]
    Draft,
    Published,
    BeganEnrollment,
    ClosedEnrollment,
    Started,
    Ended,
}

/// A stored event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub begin_enrollment_date_time: NaiveDateTime,
    pub close_enrollment_date_time: NaiveDateTime,
    pub begin_event_date_time: NaiveDateTime,
    pub end_event_date_time: NaiveDateTime,
    /// Absent for online events
    pub location: Option<String>,
    pub base_price: i32,
    /// 0 means there is no upper bound
    pub max_price: i32,
    pub limit_of_enrollment: i32,
    pub offline: bool,
    pub free: bool,
    pub event_status: EventStatus,
}

impl Event {
    /// Recompute the derived `free` and `offline` flags
    pub fn update(&mut self) {
        self.free = self.base_price == 0 && self.max_price == 0;
        self.offline = self
            .location
            .as_deref()
            .is_some_and(|location| !location.trim().is_empty());
    }
}

impl_entity!(Event, "events", "event", sort {
    "id" => id,
    "name" => name,
    "description" => description,
    "location" => location,
    "basePrice" => base_price,
    "maxPrice" => max_price,
    "limitOfEnrollment" => limit_of_enrollment,
    "beginEnrollmentDateTime" => begin_enrollment_date_time,
    "closeEnrollmentDateTime" => close_enrollment_date_time,
    "beginEventDateTime" => begin_event_date_time,
    "endEventDateTime" => end_event_date_time,
    "eventStatus" => event_status,
});

/// Build an unsaved `DRAFT` event from a validated payload
///
/// Declarative validation guarantees the required fields are present;
/// a missing one falls back to its zero value.
impl From<&EventDto> for Event {
    fn from(dto: &EventDto) -> Self {
        Self {
            id: None,
            name: dto.name.clone().unwrap_or_default(),
            description: dto.description.clone().unwrap_or_default(),
            begin_enrollment_date_time: dto.begin_enrollment_date_time.unwrap_or_default(),
            close_enrollment_date_time: dto.close_enrollment_date_time.unwrap_or_default(),
            begin_event_date_time: dto.begin_event_date_time.unwrap_or_default(),
            end_event_date_time: dto.end_event_date_time.unwrap_or_default(),
            location: dto.location.clone(),
            base_price: dto.base_price,
            max_price: dto.max_price,
            limit_of_enrollment: dto.limit_of_enrollment,
            offline: false,
            free: false,
            event_status: EventStatus::Draft,
        }
    }
}
