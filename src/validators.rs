//! Form field validation for menuboard
//!
//! This module provides centralized validation for user-entered form values.
//! Each constraint kind produces a deterministic message so the view layer
//! (and the tests) can assert exact strings. Validation failures are
//! reported, never thrown: the worst outcome is a [`ValidationResult`] with
//! `valid = false`.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Message for an empty required field.
pub const REQUIRED_MESSAGE: &str = "This field is required";
/// Message for a value that is not shaped like `local@domain.tld`.
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
/// Message for a value that is not shaped like a phone number.
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

/// Constraint kind declared on a form field.
///
/// Wire values match the input attributes the view layer reads
/// (`required`, `email`, `tel`).
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum FieldKind {
    /// Non-empty after trimming
    #[strum(serialize = "required")]
    Required,
    /// Standard `local@domain.tld` shape
    #[strum(serialize = "email")]
    Email,
    /// Digits and separators, at least 10 characters
    #[strum(serialize = "tel", serialize = "phone")]
    Phone,
}

impl FieldKind {
    /// Parses a field constraint name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFieldKind`] for names outside the known set.
    pub fn parse(value: &str) -> Result<Self> {
        value
            .parse()
            .map_err(|_| Error::UnknownFieldKind(value.to_string()))
    }
}

/// Outcome of validating one field value.
///
/// `message` is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Validates a single field value against its declared constraint kind.
///
/// Shape constraints (email, phone) apply only to non-empty input: an
/// optional field left blank validates. Required-ness is its own kind.
pub fn validate(kind: FieldKind, value: &str) -> ValidationResult {
    let value = value.trim();
    match kind {
        FieldKind::Required => {
            if value.is_empty() {
                ValidationResult::fail(REQUIRED_MESSAGE)
            } else {
                ValidationResult::ok()
            }
        }
        FieldKind::Email => {
            if value.is_empty() || is_email_shape(value) {
                ValidationResult::ok()
            } else {
                ValidationResult::fail(EMAIL_MESSAGE)
            }
        }
        FieldKind::Phone => {
            if value.is_empty() || is_phone_shape(value) {
                ValidationResult::ok()
            } else {
                ValidationResult::fail(PHONE_MESSAGE)
            }
        }
    }
}

/// Checks the `local@domain.tld` shape: non-empty local part, a domain with a
/// dot not at either end, no whitespace and no second `@`.
fn is_email_shape(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Checks the phone shape: an optional leading `+`, then at least one digit
/// or separator (space, dash, parentheses), and a total trimmed length of at
/// least 10.
fn is_phone_shape(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    !body.is_empty()
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
        && value.chars().count() >= 10
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    proptest! {
        #[test]
        fn test_validate_never_panics(value in "\\PC*") {
            for kind in FieldKind::iter() {
                let _ = validate(kind, &value);
            }
        }

        #[test]
        fn test_message_is_empty_iff_valid(value in "\\PC*") {
            for kind in FieldKind::iter() {
                let result = validate(kind, &value);
                prop_assert_eq!(result.valid, result.message.is_empty());
            }
        }

        #[test]
        fn test_valid_email_contains_at_and_dot(value in "\\PC{1,40}") {
            let result = validate(FieldKind::Email, &value);
            let trimmed = value.trim();
            if result.valid && !trimmed.is_empty() {
                prop_assert!(trimmed.contains('@'));
                prop_assert!(trimmed.contains('.'));
            }
        }

        #[test]
        fn test_valid_phone_is_at_least_ten_chars(value in "\\PC{1,40}") {
            let result = validate(FieldKind::Phone, &value);
            if result.valid && !value.trim().is_empty() {
                prop_assert!(value.trim().chars().count() >= 10);
            }
        }
    }
}
