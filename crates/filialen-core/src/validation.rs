//! # Field Validation Rules
//!
//! Constraint checks applied to incoming branch data. Each check records a
//! violation in a shared [`FieldErrors`] and hands back the value when it is
//! valid, so a caller can run every rule before deciding whether to fail.

use rust_decimal::Decimal;

use crate::error::FieldErrors;

/// Message for an absent, empty, or whitespace-only string.
pub const MUST_NOT_BE_BLANK: &str = "must not be blank";
/// Message for an absent required value.
pub const MUST_NOT_BE_NULL: &str = "must not be null";
/// Message for a negative amount.
pub const MUST_BE_POSITIVE_OR_ZERO: &str = "must be greater than or equal to 0";

/// Require a string with at least one character above U+0020.
///
/// Only ASCII space and control characters count as blank; other Unicode
/// whitespace such as U+00A0 is content. The value is returned unmodified.
pub fn not_blank(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<String> {
    match value {
        Some(v) if !is_blank(&v) => Some(v),
        _ => {
            errors.add(field, MUST_NOT_BE_BLANK);
            None
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c <= ' ')
}

/// Require a present amount that is zero or positive.
pub fn positive_or_zero(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<Decimal>,
) -> Option<Decimal> {
    match value {
        None => {
            errors.add(field, MUST_NOT_BE_NULL);
            None
        }
        Some(v) if v.is_sign_negative() && !v.is_zero() => {
            errors.add(field, MUST_BE_POSITIVE_OR_ZERO);
            None
        }
        Some(v) => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn not_blank_accepts_text() {
        let mut errors = FieldErrors::new();
        let v = not_blank(&mut errors, "naam", Some("Andros".into()));
        assert_eq!(v.as_deref(), Some("Andros"));
        assert!(errors.is_empty());
    }

    #[test]
    fn not_blank_rejects_missing_empty_and_whitespace() {
        for input in [None, Some(String::new()), Some("   \t".to_string())] {
            let mut errors = FieldErrors::new();
            assert!(not_blank(&mut errors, "naam", input).is_none());
            assert_eq!(errors.get("naam"), Some(MUST_NOT_BE_BLANK));
        }
    }

    #[test]
    fn not_blank_rejects_control_characters() {
        for input in ["\u{0001}", " \u{001F}\r\n", "\0"] {
            let mut errors = FieldErrors::new();
            assert!(not_blank(&mut errors, "naam", Some(input.to_string())).is_none());
            assert_eq!(errors.get("naam"), Some(MUST_NOT_BE_BLANK), "input {input:?}");
        }
    }

    #[test]
    fn not_blank_accepts_non_ascii_whitespace() {
        for input in ["\u{00A0}", "\u{2003}", "\u{3000}"] {
            let mut errors = FieldErrors::new();
            assert_eq!(
                not_blank(&mut errors, "naam", Some(input.to_string())).as_deref(),
                Some(input)
            );
            assert!(errors.is_empty(), "input {input:?}");
        }
    }

    #[test]
    fn positive_or_zero_accepts_zero_and_positive() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            positive_or_zero(&mut errors, "omzet", Some(Decimal::ZERO)),
            Some(Decimal::ZERO)
        );
        assert_eq!(
            positive_or_zero(&mut errors, "omzet", Some(Decimal::new(250050, 2))),
            Some(Decimal::new(250050, 2))
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn positive_or_zero_accepts_negative_zero() {
        let mut errors = FieldErrors::new();
        let negative_zero = -Decimal::ZERO;
        assert!(positive_or_zero(&mut errors, "omzet", Some(negative_zero)).is_some());
        assert!(errors.is_empty());
    }

    #[test]
    fn positive_or_zero_rejects_negative() {
        let mut errors = FieldErrors::new();
        assert!(positive_or_zero(&mut errors, "omzet", Some(Decimal::new(-1, 2))).is_none());
        assert_eq!(errors.get("omzet"), Some(MUST_BE_POSITIVE_OR_ZERO));
    }

    #[test]
    fn positive_or_zero_rejects_missing() {
        let mut errors = FieldErrors::new();
        assert!(positive_or_zero(&mut errors, "omzet", None).is_none());
        assert_eq!(errors.get("omzet"), Some(MUST_NOT_BE_NULL));
    }
}
