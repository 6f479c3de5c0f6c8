//! Per-field validation rules
//!
//! Pure functions: value in, verdict out. A failed rule is a value, never a
//! crate error, and no rule panics on any input.

use serde::{Deserialize, Serialize};

use crate::domain::field::{FieldId, FieldValue};

/// Minimum accepted name length, after trimming
pub const MIN_NAME_LEN: usize = 2;
/// Minimum accepted phone length, after trimming
pub const MIN_PHONE_LEN: usize = 10;
/// Minimum accepted message length, after trimming
pub const MIN_MESSAGE_LEN: usize = 10;

/// Why a rule rejected a value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleViolation {
    /// Required value is missing or blank
    Empty,
    /// Value is shorter than the field's minimum
    TooShort,
    /// Value does not match the field's expected shape
    BadFormat,
    /// Terms checkbox left unchecked
    NotAccepted,
}

impl RuleViolation {
    /// User-facing message for this violation on the given field
    pub fn message(&self, field: FieldId) -> &'static str {
        match field {
            FieldId::Name => match self {
                RuleViolation::Empty => "Please enter your name",
                _ => "Name must be at least 2 characters",
            },
            FieldId::Email => match self {
                RuleViolation::Empty => "Please enter your email",
                _ => "Please enter a valid email address",
            },
            FieldId::Phone => match self {
                RuleViolation::TooShort => "Phone number must be at least 10 digits",
                _ => "Please enter a valid phone number",
            },
            FieldId::Cuisine => "Please select your favorite cuisine",
            FieldId::Message => match self {
                RuleViolation::Empty => "Please enter a message",
                _ => "Message must be at least 10 characters",
            },
            FieldId::Terms => "You must agree to the terms and conditions",
        }
    }
}

/// Outcome of a single rule
pub type RuleResult = Result<(), RuleViolation>;

/// Name: required, at least two characters
pub fn validate_name(value: &str) -> RuleResult {
    let name = value.trim();
    if name.is_empty() {
        return Err(RuleViolation::Empty);
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(RuleViolation::TooShort);
    }
    Ok(())
}

/// Email: required, `local@domain.tld` shape
pub fn validate_email(value: &str) -> RuleResult {
    let email = value.trim();
    if email.is_empty() {
        return Err(RuleViolation::Empty);
    }
    if !is_valid_email(email) {
        return Err(RuleViolation::BadFormat);
    }
    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }
    let (local, domain) = (parts[0], parts[1]);
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Phone: optional; when present, phone-shaped and at least ten characters
pub fn validate_phone(value: &str) -> RuleResult {
    let phone = value.trim();
    if phone.is_empty() {
        // Optional field: blank passes
        return Ok(());
    }
    if !phone.chars().all(is_phone_char) {
        return Err(RuleViolation::BadFormat);
    }
    if phone.chars().count() < MIN_PHONE_LEN {
        return Err(RuleViolation::TooShort);
    }
    Ok(())
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')')
}

/// Cuisine: a selection must have been made
///
/// The unselected placeholder carries an empty value; no trimming, a select
/// cannot hold stray whitespace.
pub fn validate_cuisine(value: &str) -> RuleResult {
    if value.is_empty() {
        return Err(RuleViolation::Empty);
    }
    Ok(())
}

/// Message: required, at least ten characters
pub fn validate_message(value: &str) -> RuleResult {
    let message = value.trim();
    if message.is_empty() {
        return Err(RuleViolation::Empty);
    }
    if message.chars().count() < MIN_MESSAGE_LEN {
        return Err(RuleViolation::TooShort);
    }
    Ok(())
}

/// Terms: checkbox must be checked
pub fn validate_terms(checked: bool) -> RuleResult {
    if !checked {
        return Err(RuleViolation::NotAccepted);
    }
    Ok(())
}

/// Dispatch a value to its field's rule
///
/// A value of the wrong shape (text where a checkbox is expected, or the
/// reverse) is treated as absent rather than panicking.
pub fn validate(field: FieldId, value: &FieldValue) -> RuleResult {
    match field {
        FieldId::Name => validate_name(value.as_text().unwrap_or_default()),
        FieldId::Email => validate_email(value.as_text().unwrap_or_default()),
        FieldId::Phone => validate_phone(value.as_text().unwrap_or_default()),
        FieldId::Cuisine => validate_cuisine(value.as_text().unwrap_or_default()),
        FieldId::Message => validate_message(value.as_text().unwrap_or_default()),
        FieldId::Terms => validate_terms(value.as_checked().unwrap_or(false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        assert_eq!(validate_name("Ada"), Ok(()));
        assert_eq!(validate_name("  Jo  "), Ok(()));
    }

    #[test]
    fn test_name_empty() {
        assert_eq!(validate_name(""), Err(RuleViolation::Empty));
        assert_eq!(validate_name("   "), Err(RuleViolation::Empty));
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(validate_name("A"), Err(RuleViolation::TooShort));
    }

    #[test]
    fn test_email_valid() {
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email("  ada@example.org  "), Ok(()));
    }

    #[test]
    fn test_email_empty() {
        assert_eq!(validate_email(""), Err(RuleViolation::Empty));
    }

    #[test]
    fn test_email_bad_format() {
        assert_eq!(validate_email("a@b"), Err(RuleViolation::BadFormat));
        assert_eq!(validate_email("no-at-sign.com"), Err(RuleViolation::BadFormat));
        assert_eq!(validate_email("two@@signs.com"), Err(RuleViolation::BadFormat));
        assert_eq!(validate_email("a b@c.com"), Err(RuleViolation::BadFormat));
        assert_eq!(validate_email("a@.com"), Err(RuleViolation::BadFormat));
        assert_eq!(validate_email("a@b."), Err(RuleViolation::BadFormat));
    }

    #[test]
    fn test_phone_optional() {
        assert_eq!(validate_phone(""), Ok(()));
        assert_eq!(validate_phone("   "), Ok(()));
    }

    #[test]
    fn test_phone_valid() {
        assert_eq!(validate_phone("123-456-7890"), Ok(()));
        assert_eq!(validate_phone("+1 (555) 123-4567"), Ok(()));
    }

    #[test]
    fn test_phone_too_short() {
        assert_eq!(validate_phone("123"), Err(RuleViolation::TooShort));
    }

    #[test]
    fn test_phone_bad_format() {
        assert_eq!(validate_phone("call me"), Err(RuleViolation::BadFormat));
        // Letter-only strings fail on shape no matter how long
        assert_eq!(validate_phone("abcdefghijk"), Err(RuleViolation::BadFormat));
    }

    #[test]
    fn test_cuisine() {
        assert_eq!(validate_cuisine(""), Err(RuleViolation::Empty));
        assert_eq!(validate_cuisine("jollof"), Ok(()));
    }

    #[test]
    fn test_message() {
        assert_eq!(validate_message(""), Err(RuleViolation::Empty));
        assert_eq!(validate_message("hi"), Err(RuleViolation::TooShort));
        assert_eq!(validate_message("hello there!"), Ok(()));
    }

    #[test]
    fn test_terms() {
        assert_eq!(validate_terms(false), Err(RuleViolation::NotAccepted));
        assert_eq!(validate_terms(true), Ok(()));
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(validate(FieldId::Name, &FieldValue::text("Ada")), Ok(()));
        assert_eq!(
            validate(FieldId::Terms, &FieldValue::checked(false)),
            Err(RuleViolation::NotAccepted)
        );
        // Shape mismatch is treated as absent, not a panic
        assert_eq!(
            validate(FieldId::Name, &FieldValue::checked(true)),
            Err(RuleViolation::Empty)
        );
    }

    #[test]
    fn test_rules_are_idempotent() {
        for _ in 0..3 {
            assert_eq!(validate_name("A"), Err(RuleViolation::TooShort));
            assert_eq!(validate_email("a@b.com"), Ok(()));
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RuleViolation::Empty.message(FieldId::Name),
            "Please enter your name"
        );
        assert_eq!(
            RuleViolation::TooShort.message(FieldId::Message),
            "Message must be at least 10 characters"
        );
        assert_eq!(
            RuleViolation::NotAccepted.message(FieldId::Terms),
            "You must agree to the terms and conditions"
        );
    }
}
