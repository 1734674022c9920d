//! Email field: platform constraint result and its translation

use crate::foundation::Validate;
use crate::validators::{EmailShape, LengthMode, MinLength};

use super::{Field, FieldErrorState, Format, Reason};

/// The constraint-validation flags a host reports for the email input.
///
/// Mirrors the subset of the HTML `ValidityState` the form reacts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailValidity {
    /// The field is required and empty.
    pub value_missing: bool,
    /// The value is not an email address.
    pub type_mismatch: bool,
    /// The value is shorter than this configured minimum.
    pub too_short: Option<usize>,
}

impl EmailValidity {
    pub const VALID: Self = Self {
        value_missing: false,
        type_mismatch: false,
        too_short: None,
    };

    pub fn is_valid(&self) -> bool {
        !self.value_missing && !self.type_mismatch && self.too_short.is_none()
    }
}

/// A host's native email check.
///
/// Closures `Fn(&str) -> EmailValidity` implement this directly.
pub trait EmailConstraint {
    fn check(&self, value: &str) -> EmailValidity;
}

impl<F> EmailConstraint for F
where
    F: Fn(&str) -> EmailValidity,
{
    fn check(&self, value: &str) -> EmailValidity {
        self(value)
    }
}

/// Email check for hosts without a native one.
///
/// Uses [`EmailShape`], an approximation of the browser grammar, and counts
/// length in UTF-16 code units like `minlength` does. An empty value never
/// reports a type mismatch or a length problem, only `value_missing` when
/// required.
#[derive(Debug, Clone, Copy)]
pub struct FallbackEmailCheck {
    required: bool,
    min_length: Option<MinLength>,
}

impl FallbackEmailCheck {
    pub fn new(required: bool, min_length: Option<usize>) -> Self {
        Self {
            required,
            min_length: min_length.map(MinLength::utf16),
        }
    }
}

impl Default for FallbackEmailCheck {
    fn default() -> Self {
        Self::new(true, None)
    }
}

impl EmailConstraint for FallbackEmailCheck {
    fn check(&self, value: &str) -> EmailValidity {
        if value.is_empty() {
            return EmailValidity {
                value_missing: self.required,
                ..EmailValidity::VALID
            };
        }
        EmailValidity {
            value_missing: false,
            type_mismatch: !EmailShape.is_valid(value),
            too_short: self
                .min_length
                .filter(|rule| !rule.is_valid(value))
                .map(|rule| rule.min),
        }
    }
}

/// Translates a validity report into the email field's error state.
///
/// Precedence: missing, then wrong format, then too short.
pub fn check_email(value: &str, validity: &EmailValidity) -> FieldErrorState {
    let reason = if validity.value_missing {
        Reason::Empty
    } else if validity.type_mismatch {
        Reason::FormatInvalid(Format::Email)
    } else if let Some(min) = validity.too_short {
        Reason::FormatInvalid(Format::EmailTooShort {
            min,
            actual: LengthMode::Utf16.measure(value),
        })
    } else {
        return FieldErrorState::Clear;
    };
    FieldErrorState::active(Field::Email, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_required_empty() {
        let validity = FallbackEmailCheck::default().check("");
        assert!(validity.value_missing);
        assert!(!validity.is_valid());

        let optional = FallbackEmailCheck::new(false, Some(5)).check("");
        assert!(optional.is_valid());
    }

    #[test]
    fn test_fallback_flags_can_combine() {
        let validity = FallbackEmailCheck::new(true, Some(8)).check("abc");
        assert!(validity.type_mismatch);
        assert_eq!(validity.too_short, Some(8));
        assert_eq!(
            check_email("abc", &validity).message(),
            "You need to enter an email address."
        );
    }

    #[test]
    fn test_too_short_message_uses_utf16_length() {
        let validity = EmailValidity {
            too_short: Some(12),
            ..EmailValidity::VALID
        };
        assert_eq!(
            check_email("é@b.co", &validity).message(),
            "Email should be at least 12 characters; you entered 6."
        );
    }

    #[test]
    fn test_closure_as_constraint() {
        let platform = |value: &str| EmailValidity {
            type_mismatch: !value.ends_with(".ch"),
            ..EmailValidity::VALID
        };
        assert!(platform.check("a@b.ch").is_valid());
        assert!(!platform.check("a@b.fr").is_valid());
    }

    #[test]
    fn test_valid_is_clear() {
        assert_eq!(check_email("a@b.co", &EmailValidity::VALID), FieldErrorState::Clear);
    }
}
