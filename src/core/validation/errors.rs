//! Error accumulator shared by declarative and business-rule validation
//!
//! Validation never stops at the first problem: every check appends to an
//! [`Errors`] value and the caller inspects [`Errors::has_errors`] afterwards.

use serde::Serialize;
use serde_json::Value;

/// One rejected aspect of a payload
///
/// Object-level errors leave `field` and `rejected_value` empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    pub object_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub default_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<Value>,
}

impl ErrorEntry {
    pub fn is_global(&self) -> bool {
        self.field.is_none()
    }
}

/// Accumulates field and object errors for one payload
#[derive(Debug, Clone, PartialEq)]
pub struct Errors {
    object_name: String,
    entries: Vec<ErrorEntry>,
}

impl Errors {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            entries: Vec::new(),
        }
    }

    /// Record an object-level error
    pub fn reject(&mut self, code: &str, default_message: impl Into<String>) {
        self.entries.push(ErrorEntry {
            object_name: self.object_name.clone(),
            field: None,
            code: code.to_string(),
            default_message: default_message.into(),
            rejected_value: None,
        });
    }

    /// Record an error against a single field
    pub fn reject_value(
        &mut self,
        field: &str,
        code: &str,
        default_message: impl Into<String>,
        rejected_value: Option<Value>,
    ) {
        self.entries.push(ErrorEntry {
            object_name: self.object_name.clone(),
            field: Some(field.to_string()),
            code: code.to_string(),
            default_message: default_message.into(),
            rejected_value,
        });
    }

    /// Append the failures reported by a `validator` derive
    ///
    /// Fields are reported in camelCase, sorted by name.
    pub fn add_field_failures(&mut self, failures: &validator::ValidationErrors) {
        let mut collected: Vec<(String, &validator::ValidationError)> = failures
            .field_errors()
            .into_iter()
            .flat_map(|(field, list)| {
                let field = camel_case(&field);
                list.iter().map(move |failure| (field.clone(), failure))
            })
            .collect();
        collected.sort_by(|a, b| a.0.cmp(&b.0));

        for (field, failure) in collected {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            let rejected = failure.params.get("value").cloned();
            self.reject_value(&field, &failure.code, message, rejected);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Object-level errors only
    pub fn global_errors(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter().filter(|e| e.is_global())
    }

    /// Errors attached to a field
    pub fn field_errors(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter().filter(|e| !e.is_global())
    }

    pub fn into_entries(self) -> Vec<ErrorEntry> {
        self.entries
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, code = "NotEmpty", message = "must not be empty"))]
        display_name: String,
        #[validate(range(min = 0, code = "Min"))]
        base_price: i32,
    }

    #[test]
    fn test_reject_records_object_error() {
        let mut errors = Errors::new("eventDto");
        errors.reject("wrongPrices", "prices are wrong");

        assert!(errors.has_errors());
        let entry = &errors.entries()[0];
        assert!(entry.is_global());
        assert_eq!(entry.object_name, "eventDto");
        assert_eq!(entry.code, "wrongPrices");
    }

    #[test]
    fn test_object_error_serialization_omits_field() {
        let mut errors = Errors::new("eventDto");
        errors.reject("wrongPrices", "prices are wrong");

        assert_eq!(
            serde_json::to_value(&errors.entries()[0]).unwrap(),
            json!({
                "objectName": "eventDto",
                "code": "wrongPrices",
                "defaultMessage": "prices are wrong"
            })
        );
    }

    #[test]
    fn test_field_failures_are_converted() {
        let sample = Sample {
            display_name: String::new(),
            base_price: -1,
        };
        let failures = sample.validate().unwrap_err();

        let mut errors = Errors::new("sample");
        errors.add_field_failures(&failures);

        assert_eq!(errors.error_count(), 2);
        let fields: Vec<_> = errors
            .field_errors()
            .filter_map(|e| e.field.as_deref())
            .collect();
        assert_eq!(fields, vec!["basePrice", "displayName"]);

        let name_error = &errors.entries()[1];
        assert_eq!(name_error.code, "NotEmpty");
        assert_eq!(name_error.default_message, "must not be empty");
        assert_eq!(errors.entries()[0].code, "Min");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("begin_event_date_time"), "beginEventDateTime");
        assert_eq!(camel_case("name"), "name");
        assert_eq!(camel_case("maxPrice"), "maxPrice");
    }
}
