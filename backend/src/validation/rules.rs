//! Common validation rules shared across request payloads.

use validator::ValidationError;

/// Rejects values that are empty after trimming whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Validates a phone number as typed into the contact form.
///
/// Requirements:
/// - 7-20 characters
/// - Digits, spaces, dashes and parentheses, with an optional leading `+`
/// - At least 7 digits
pub fn validate_mobile_number(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.len() < 7 || trimmed.len() > 20 {
        return Err(ValidationError::new("mobile_invalid_length")
            .with_message("must be between 7 and 20 characters".into()));
    }

    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
    {
        return Err(ValidationError::new("mobile_invalid_characters")
            .with_message("may only contain digits, spaces, dashes and parentheses".into()));
    }

    if body.chars().filter(|c| c.is_ascii_digit()).count() < 7 {
        return Err(ValidationError::new("mobile_too_few_digits")
            .with_message("must contain at least 7 digits".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("Asha").is_ok());
    }

    #[test]
    fn mobile_accepts_common_formats() {
        assert!(validate_mobile_number("+91 98200 12345").is_ok());
        assert!(validate_mobile_number("(020) 2612-3456").is_ok());
    }

    #[test]
    fn mobile_rejects_letters() {
        let err = validate_mobile_number("98200-CALLME").expect_err("letters");
        assert_eq!(err.code, "mobile_invalid_characters");
    }

    #[test]
    fn mobile_rejects_short_values() {
        let err = validate_mobile_number("12345").expect_err("too short");
        assert_eq!(err.code, "mobile_invalid_length");
    }

    #[test]
    fn mobile_rejects_punctuation_only() {
        let err = validate_mobile_number("+(--) ---").expect_err("no digits");
        assert_eq!(err.code, "mobile_too_few_digits");
    }
}
