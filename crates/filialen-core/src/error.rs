//! # Error Types
//!
//! The only domain failure is a constraint violation on one or more fields.
//! [`FieldErrors`] collects every violated field with a human-readable
//! message, keyed by the field's wire name (`naam`, `gemeente`, `omzet`).

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Field name → message map describing every violated constraint.
///
/// Serializes as a flat JSON object, e.g.
/// `{"naam":"must not be blank","omzet":"must not be null"}`.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[error("validation failed: {}", summarize(&.0))]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Create an empty set of field errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation. The first message recorded for a field is kept.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether `field` has a recorded violation.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `Ok(value)` when no violation was recorded, `Err(self)` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn summarize(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field} {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<FieldErrors> for BTreeMap<String, String> {
    fn from(errors: FieldErrors) -> Self {
        errors.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("omzet", "must not be null");
        errors.add("omzet", "must be greater than or equal to 0");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("omzet"), Some("must not be null"));
    }

    #[test]
    fn into_result_passes_value_through_when_empty() {
        let result = FieldErrors::new().into_result(5);
        assert_eq!(result, Ok(5));
    }

    #[test]
    fn into_result_fails_with_violations() {
        let mut errors = FieldErrors::new();
        errors.add("naam", "must not be blank");
        let err = errors.into_result(()).unwrap_err();
        assert!(err.contains("naam"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut errors = FieldErrors::new();
        errors.add("naam", "must not be blank");
        errors.add("gemeente", "must not be blank");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"naam": "must not be blank", "gemeente": "must not be blank"})
        );
    }

    #[test]
    fn display_lists_fields_in_order() {
        let mut errors = FieldErrors::new();
        errors.add("omzet", "must not be null");
        errors.add("gemeente", "must not be blank");
        assert_eq!(
            errors.to_string(),
            "validation failed: gemeente must not be blank; omzet must not be null"
        );
    }
}
