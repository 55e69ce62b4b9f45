//! Cross-field business rules for event payloads

use super::dto::EventDto;
use crate::core::Errors;
use chrono::NaiveDateTime;

/// Checks the rules that span several fields of an [`EventDto`]
///
/// Violations are appended to the accumulator as object-level errors.
/// Date rules whose operands are missing are skipped, since declarative
/// validation already reports those fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventValidator;

impl EventValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, dto: &EventDto, errors: &mut Errors) {
        if dto.base_price != 0 && dto.max_price != 0 && dto.base_price > dto.max_price {
            errors.reject(
                "wrongPrices",
                "basePrice must not be greater than maxPrice",
            );
        }

        if before(dto.close_enrollment_date_time, dto.begin_enrollment_date_time) {
            errors.reject(
                "wrongEnrollmentDateTime",
                "closeEnrollmentDateTime must not be before beginEnrollmentDateTime",
            );
        }

        if before(dto.end_event_date_time, dto.begin_event_date_time) {
            errors.reject(
                "wrongEventDateTime",
                "endEventDateTime must not be before beginEventDateTime",
            );
        }

        if before(dto.begin_event_date_time, dto.close_enrollment_date_time) {
            errors.reject(
                "wrongEventBeginDateTime",
                "beginEventDateTime must not be before closeEnrollmentDateTime",
            );
        }

        if errors.has_errors() {
            tracing::debug!(count = errors.error_count(), "event payload broke business rules");
        }
    }
}

/// True only when both instants are present and `a` is strictly earlier
fn before(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a < b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::event::model::tests::at;

    fn dto() -> EventDto {
        EventDto {
            name: Some("Spring".to_string()),
            description: Some("REST API Development with Spring".to_string()),
            begin_enrollment_date_time: Some(at(23, 14)),
            close_enrollment_date_time: Some(at(24, 14)),
            begin_event_date_time: Some(at(25, 14)),
            end_event_date_time: Some(at(26, 14)),
            location: None,
            base_price: 100,
            max_price: 200,
            limit_of_enrollment: 100,
        }
    }

    fn codes(dto: &EventDto) -> Vec<String> {
        let mut errors = Errors::new("eventDto");
        EventValidator::new().validate(dto, &mut errors);
        errors.entries().iter().map(|e| e.code.clone()).collect()
    }

    #[test]
    fn test_valid_dto_has_no_errors() {
        assert!(codes(&dto()).is_empty());
    }

    #[test]
    fn test_base_price_above_max_price() {
        let mut d = dto();
        d.base_price = 10_000;
        assert_eq!(codes(&d), vec!["wrongPrices"]);
    }

    #[test]
    fn test_zero_max_price_is_unbounded() {
        let mut d = dto();
        d.base_price = 10_000;
        d.max_price = 0;
        assert!(codes(&d).is_empty());
    }

    #[test]
    fn test_every_violation_is_reported() {
        let d = EventDto {
            base_price: 10_000,
            max_price: 200,
            begin_enrollment_date_time: Some(at(26, 14)),
            close_enrollment_date_time: Some(at(25, 14)),
            begin_event_date_time: Some(at(24, 14)),
            end_event_date_time: Some(at(23, 14)),
            ..dto()
        };
        assert_eq!(
            codes(&d),
            vec![
                "wrongPrices",
                "wrongEnrollmentDateTime",
                "wrongEventDateTime",
                "wrongEventBeginDateTime"
            ]
        );
    }

    #[test]
    fn test_missing_dates_are_skipped() {
        let d = EventDto {
            begin_enrollment_date_time: None,
            end_event_date_time: None,
            ..dto()
        };
        assert!(codes(&d).is_empty());
    }

    #[test]
    fn test_errors_are_object_level() {
        let mut d = dto();
        d.base_price = 10_000;
        let mut errors = Errors::new("eventDto");
        EventValidator::new().validate(&d, &mut errors);
        assert_eq!(errors.global_errors().count(), 1);
        assert_eq!(errors.field_errors().count(), 0);
    }
}
