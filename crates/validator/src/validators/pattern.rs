//! Character-class validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string contains at least one character accepted by
    /// `predicate`.
    pub RequiresChar { label: &'static str, predicate: fn(char) -> bool } for str;
    rule(self, input) { input.chars().any(self.predicate) }
    error(self, input) {
        ValidationError::new("requires_char", format!("Must contain at least one {}", self.label))
            .with_param("class", self.label)
    }
    fn requires_char(label: &'static str, predicate: fn(char) -> bool);
}

/// At least one ASCII uppercase letter.
#[must_use]
pub fn requires_uppercase() -> RequiresChar {
    requires_char("uppercase letter", |c| c.is_ascii_uppercase())
}

/// At least one ASCII digit.
#[must_use]
pub fn requires_digit() -> RequiresChar {
    requires_char("number", |c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_requires_uppercase() {
        assert!(requires_uppercase().validate("abC").is_ok());
        assert!(requires_uppercase().validate("abc").is_err());
        assert!(requires_uppercase().validate("abÇ").is_err());
    }

    #[test]
    fn test_requires_digit_error() {
        let err = requires_digit().validate("abc").unwrap_err();
        assert_eq!(err.code, "requires_char");
        assert_eq!(err.message, "Must contain at least one number");
        assert_eq!(err.param("class"), Some("number"));
    }
}
