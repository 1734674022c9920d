//! System-level errors
//!
//! These are faults in how the engine is configured or driven. A user typing
//! a bad postal code is never a `FormError`; that is a
//! [`FieldErrorState`](crate::form::FieldErrorState).

use thiserror::Error;

/// Standard result type for engine and configuration operations.
pub type FormResult<T> = Result<T, FormError>;

/// Configuration and wiring errors.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum FormError {
    /// A country was selected that has no postal rule.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),

    /// The postal rule table lists the same country twice.
    #[error("country code '{0}' has more than one postal rule")]
    DuplicateCountry(String),

    /// A postal rule has a blank country code.
    #[error("postal rule with an empty country code")]
    EmptyCountryCode,

    /// The postal rule table is empty.
    #[error("at least one postal rule is required")]
    NoPostalRules,

    /// A postal pattern failed to compile.
    #[error("invalid postal pattern for '{country}': {source}")]
    InvalidPattern {
        country: String,
        #[source]
        source: regex::Error,
    },

    /// A field name did not parse.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            FormError::UnknownCountry("it".into()).to_string(),
            "unknown country code 'it'"
        );
        assert_eq!(
            FormError::NoPostalRules.to_string(),
            "at least one postal rule is required"
        );
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = FormError::InvalidPattern {
            country: "ch".into(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid postal pattern for 'ch'"));
    }
}
