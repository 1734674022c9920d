//! String content validators
//!
//! Patterns here follow browser `RegExp` semantics for the classes the form
//! rules use: `\d` is ASCII-only and every pattern must match the whole input.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::foundation::ValidationError;

/// Fallback email shape used when the host has no native email check.
///
/// This is an approximation of the HTML email grammar: one `@`, no
/// whitespace, and a dot somewhere after the `@`.
pub const EMAIL_SHAPE_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_SHAPE_PATTERN).expect("email shape pattern is valid"));

/// Compiles `pattern` so that it must match the entire input.
///
/// The pattern runs in Unicode mode, so `.`, `\S` and negated classes match
/// any character, but `\d` and `\w` keep their ASCII meaning.
pub fn full_match(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{})$", ascii_classes(pattern))).build()
}

/// Rewrites the `\d`, `\D`, `\w` and `\W` escapes as explicit ASCII classes.
///
/// Bracketed replacements are valid inside a character class too, where the
/// `regex` crate reads them as a nested class.
fn ascii_classes(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains('\\') {
        return Cow::Borrowed(pattern);
    }

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => out.push_str("[0-9]"),
            Some('D') => out.push_str("[^0-9]"),
            Some('w') => out.push_str("[0-9A-Za-z_]"),
            Some('W') => out.push_str("[^0-9A-Za-z_]"),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a whole string matches a regular expression.
    pub MatchesRegex { pattern: Regex, source: String } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex")
            .with_param("pattern", self.source.clone())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: full_match(pattern)?,
            source: pattern.to_string(),
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl MatchesRegex {
    /// The pattern as written, before anchoring.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

// ============================================================================
// EMAIL SHAPE
// ============================================================================

crate::validator! {
    /// Validates the rough shape of an email address.
    ///
    /// See [`EMAIL_SHAPE_PATTERN`] for what "shape" means here.
    pub EmailShape for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email_shape();
}
