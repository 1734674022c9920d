//! Country-specific postal code rules

use std::sync::LazyLock;

use crate::combinators::WithMessage;
use crate::error::{FormError, FormResult};
use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::validators::content::MatchesRegex;

/// The built-in country table: `(code, pattern, message)`.
pub const STANDARD_POSTAL_RULES: [(&str, &str, &str); 3] = [
    (
        "ch",
        r"^(CH-)?\d{4}$",
        "Swiss postal codes must have exactly 4 digits: e.g. CH-1950 or 1950",
    ),
    (
        "fr",
        r"^(F-)?\d{5}$",
        "French postal codes must have exactly 5 digits: e.g. F-75012 or 75012",
    ),
    (
        "de",
        r"^(D-)?\d{5}$",
        "German postal codes must have exactly 5 digits: e.g. D-12345 or 12345",
    ),
];

static STANDARD: LazyLock<PostalRules> = LazyLock::new(|| {
    let rules = STANDARD_POSTAL_RULES
        .iter()
        .map(|(country, pattern, message)| {
            PostalRule::new(*country, pattern, *message).expect("standard postal pattern is valid")
        })
        .collect();
    PostalRules::new(rules).expect("standard postal table is well-formed")
});

// ============================================================================
// POSTAL RULE
// ============================================================================

/// A single country's postal code format and the hint shown when it fails.
#[derive(Debug, Clone)]
pub struct PostalRule {
    country: String,
    matcher: WithMessage<MatchesRegex>,
}

impl PostalRule {
    /// Compiles a rule. The pattern must match the whole postal code.
    pub fn new(
        country: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            country: country.into(),
            matcher: MatchesRegex::new(pattern)?.with_message(message),
        })
    }

    /// Country code this rule belongs to.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The pattern as configured.
    pub fn pattern(&self) -> &str {
        self.matcher.inner().as_str()
    }

    /// The hint shown when a postal code does not match.
    pub fn message(&self) -> &str {
        self.matcher.message()
    }
}

impl Validate for PostalRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.matcher
            .validate(input)
            .map_err(|e| e.with_field("postal").with_param("country", self.country.clone()))
    }
}

// ============================================================================
// RULE TABLE
// ============================================================================

/// Lookup table from country code to [`PostalRule`].
///
/// Every code appears exactly once and the table is never empty.
#[derive(Debug, Clone)]
pub struct PostalRules {
    rules: Vec<PostalRule>,
}

impl PostalRules {
    /// Builds a table, rejecting empty tables, blank codes and duplicates.
    pub fn new(rules: Vec<PostalRule>) -> FormResult<Self> {
        if rules.is_empty() {
            return Err(FormError::NoPostalRules);
        }
        for (i, rule) in rules.iter().enumerate() {
            if rule.country.trim().is_empty() {
                return Err(FormError::EmptyCountryCode);
            }
            if rules[..i].iter().any(|r| r.country == rule.country) {
                return Err(FormError::DuplicateCountry(rule.country.clone()));
            }
        }
        Ok(Self { rules })
    }

    /// The Swiss, French and German table.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Looks up the rule for a country code.
    pub fn get(&self, country: &str) -> Option<&PostalRule> {
        self.rules.iter().find(|r| r.country == country)
    }

    pub fn contains(&self, country: &str) -> bool {
        self.get(country).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PostalRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for PostalRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let rules = PostalRules::standard();
        assert_eq!(rules.len(), 3);
        let codes: Vec<_> = rules.iter().map(PostalRule::country).collect();
        assert_eq!(codes, ["ch", "fr", "de"]);
        assert!(rules.get("it").is_none());
    }

    #[test]
    fn test_swiss_rule() {
        let rules = PostalRules::standard();
        let ch = rules.get("ch").unwrap();
        assert!(ch.validate("1950").is_ok());
        assert!(ch.validate("CH-1950").is_ok());
        assert!(ch.validate("ch-1950").is_err());

        let err = ch.validate("19500").unwrap_err();
        assert_eq!(err.message, ch.message());
        assert_eq!(err.field.as_deref(), Some("postal"));
        assert_eq!(err.param("country"), Some("ch"));
    }

    #[test]
    fn test_rejects_duplicates() {
        let rules = vec![
            PostalRule::new("ch", r"\d{4}", "a").unwrap(),
            PostalRule::new("ch", r"\d{5}", "b").unwrap(),
        ];
        assert!(matches!(
            PostalRules::new(rules),
            Err(FormError::DuplicateCountry(code)) if code == "ch"
        ));
    }

    #[test]
    fn test_rejects_empty_table_and_blank_code() {
        assert!(matches!(PostalRules::new(Vec::new()), Err(FormError::NoPostalRules)));
        let blank = vec![PostalRule::new(" ", r"\d", "x").unwrap()];
        assert!(matches!(PostalRules::new(blank), Err(FormError::EmptyCountryCode)));
    }
}
