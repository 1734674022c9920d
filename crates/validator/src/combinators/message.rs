//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a rule.
///
/// The original failure is kept as a nested error so callers can still see
/// which primitive rejected the input.
///
/// # Examples
///
/// ```rust
/// use formwarden_validator::combinators::WithMessage;
/// use formwarden_validator::foundation::Validate;
/// use formwarden_validator::validators::min_length;
///
/// let rule = WithMessage::new(min_length(8), "Password must be at least 8 characters");
/// let err = rule.validate("short").unwrap_err();
/// assert_eq!(err.message, "Password must be at least 8 characters");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            ValidationError::new(original.code.clone(), Cow::Owned(self.message.clone()))
                .with_nested_error(original)
        })
    }
}
