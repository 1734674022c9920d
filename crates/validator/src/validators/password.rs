//! Password strength policy

use std::sync::LazyLock;

use crate::combinators::And;
use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::validators::content::MatchesRegex;
use crate::validators::pattern::{RequiresChar, requires_char, requires_digit, requires_uppercase};

/// Special characters a password may, and must at least once, contain.
pub const PASSWORD_SPECIALS: &str = "@$!%*?#&_";

/// Allowed alphabet and minimum length, matched against the whole password.
pub const PASSWORD_CHARSET_PATTERN: &str = r"[A-Za-z\d@$!%*?#&_]{8,}";

static CHARSET: LazyLock<MatchesRegex> = LazyLock::new(|| {
    MatchesRegex::new(PASSWORD_CHARSET_PATTERN).expect("password charset pattern is valid")
});

type PolicyRule = And<And<And<MatchesRegex, RequiresChar>, RequiresChar>, RequiresChar>;

/// The sign-up password policy.
///
/// A password passes when it is at least 8 characters drawn only from
/// ASCII letters, digits and [`PASSWORD_SPECIALS`], and contains at least one
/// uppercase letter, one digit and one special character. Lowercase letters
/// are allowed but not required.
///
/// ```rust
/// use formwarden_validator::foundation::Validate;
/// use formwarden_validator::validators::PasswordPolicy;
///
/// let policy = PasswordPolicy::standard();
/// assert!(policy.validate("Abc1!234").is_ok());
/// assert!(policy.validate("abc12345").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    rule: PolicyRule,
}

impl PasswordPolicy {
    /// Builds the standard policy.
    #[must_use]
    pub fn standard() -> Self {
        let rule = crate::compose![
            CHARSET.clone(),
            requires_uppercase(),
            requires_digit(),
            requires_char("special character", |c| PASSWORD_SPECIALS.contains(c)),
        ];
        Self { rule }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl Validate for PasswordPolicy {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.rule.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_strong_passwords() {
        let policy = PasswordPolicy::standard();
        assert!(policy.validate("Abc1!234").is_ok());
        assert!(policy.validate("PASSWORD1_").is_ok());
        assert!(policy.validate("Zz9#Zz9#Zz9#").is_ok());
    }

    #[test]
    fn test_rejects_each_missing_class() {
        let policy = PasswordPolicy::standard();
        assert_eq!(policy.validate("abc1!234").unwrap_err().param("class"), Some("uppercase letter"));
        assert_eq!(policy.validate("Abcd!efg").unwrap_err().param("class"), Some("number"));
        assert_eq!(
            policy.validate("Abcd1efg").unwrap_err().param("class"),
            Some("special character")
        );
    }

    #[test]
    fn test_rejects_short_or_foreign_characters() {
        let policy = PasswordPolicy::standard();
        assert_eq!(policy.validate("Ab1!").unwrap_err().code, "pattern");
        assert_eq!(policy.validate("Abc1!234 ").unwrap_err().code, "pattern");
        assert_eq!(policy.validate("Abc1!23é").unwrap_err().code, "pattern");
        assert_eq!(policy.validate("Abc1-2345").unwrap_err().code, "pattern");
    }
}
