//! Form validation report
//!
//! Form-level policy over the single-field validators: every constrained
//! field is checked and ALL failing fields are reported simultaneously, not
//! fail-fast, so the view layer can mark each offending input at once.
//! Required failures name the field ("Email is required"); shape failures
//! reuse the deterministic validator messages.

use crate::app::helpers::formatting::capitalize_first;
use crate::validators::{self, FieldKind};

/// One form input as the view layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
    /// Shape constraint for non-empty values; `None` for free text
    pub kind: Option<FieldKind>,
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
            kind: None,
        }
    }

    pub fn email(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: Some(FieldKind::Email),
            ..Self::text(name, value)
        }
    }

    pub fn phone(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: Some(FieldKind::Phone),
            ..Self::text(name, value)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// One failing field with its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every failing field of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates a whole form.
///
/// Returns `None` when every field passes, otherwise the full set of failing
/// fields. A form is valid iff every field individually validates.
pub fn validate_form(fields: &[FormField]) -> Option<FormErrors> {
    let errors: Vec<FieldError> = fields
        .iter()
        .filter_map(|field| {
            validate_field(field).map(|message| FieldError {
                field: field.name.clone(),
                message,
            })
        })
        .collect();

    if errors.is_empty() {
        None
    } else {
        tracing::debug!("form validation failed on {} field(s)", errors.len());
        Some(FormErrors { errors })
    }
}

/// Validates one field, returning its message on failure.
///
/// An empty optional value passes; an empty required value fails with the
/// named message; a non-empty value is checked against its shape constraint.
pub fn validate_field(field: &FormField) -> Option<String> {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return Some(format!("{} is required", capitalize_first(&field.name)));
    }
    if value.is_empty() {
        return None;
    }

    if let Some(kind) = field.kind {
        let result = validators::validate(kind, value);
        if !result.valid {
            return Some(result.message);
        }
    }
    None
}
