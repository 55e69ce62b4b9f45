//! Reusable field validators
//!
//! Custom functions plugged into `#[validate(custom(function = "..."))]`
//! attributes. Each returns a `validator::ValidationError` carrying a code
//! and a default message.

use std::borrow::Cow;
use validator::ValidationError;

/// Validator: string must contain at least one non-whitespace character
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("NotBlank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        err.add_param(Cow::Borrowed("value"), &value);
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank_rejects_empty() {
        let err = not_blank("").unwrap_err();
        assert_eq!(err.code, "NotBlank");
    }

    #[test]
    fn test_not_blank_rejects_whitespace() {
        assert!(not_blank("   \t").is_err());
    }

    #[test]
    fn test_not_blank_accepts_text() {
        assert!(not_blank("Spring").is_ok());
        assert!(not_blank("  당산  ").is_ok());
    }
}
