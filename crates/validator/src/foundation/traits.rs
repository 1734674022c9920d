//! Core traits for the rule layer
//!
//! This module defines the trait every rule primitive implements and the
//! extension trait that composes them.

use crate::combinators::{And, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait all rule primitives implement.
///
/// Generic over the input type so that a rule written for `str` cannot be
/// applied to anything else. All rules return `Result<(), ValidationError>`.
///
/// # Examples
///
/// ```rust
/// use formwarden_validator::foundation::{Validate, ValidationError};
///
/// struct HasAt;
///
/// impl Validate for HasAt {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains('@') {
///             Ok(())
///         } else {
///             Err(ValidationError::new("has_at", "Missing @"))
///         }
///     }
/// }
///
/// assert!(HasAt.validate("a@b").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns true when [`validate`](Self::validate) succeeds.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Combines two rules with logical AND.
    ///
    /// Both rules must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Replaces the failure message, keeping the original as a nested cause.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(AlwaysValid.is_valid("test"));
        assert!(!AlwaysFails.is_valid("test"));
    }

    #[test]
    fn test_and_short_circuits() {
        let err = AlwaysFails.and(AlwaysValid).validate("x").unwrap_err();
        assert_eq!(err.code, "always_fails");
    }

    #[test]
    fn test_with_message() {
        let err = AlwaysFails.with_message("custom").validate("x").unwrap_err();
        assert_eq!(err.message, "custom");
        assert_eq!(err.code, "always_fails");
        assert!(err.has_nested());
    }
}
