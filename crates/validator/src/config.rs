//! Engine configuration
//!
//! Serde-friendly description of the tunable parts: whether the email is
//! required, its minimum length, and the country table. Hosts load it however
//! they like (the CLI layers defaults, a TOML file and the environment) and
//! call [`FormConfig::build`].

use serde::{Deserialize, Serialize};

use crate::engine::FieldValidator;
use crate::error::{FormError, FormResult};
use crate::form::FallbackEmailCheck;
use crate::validators::{PasswordPolicy, PostalRule, PostalRules, STANDARD_POSTAL_RULES};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub email: EmailConfig,
    pub postal: Vec<PostalRuleConfig>,
}

/// Email constraints the fallback check enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub required: bool,
    /// Minimum length in UTF-16 code units. Unset means no minimum.
    pub min_length: Option<usize>,
}

/// One row of the country table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRuleConfig {
    pub country: String,
    pub pattern: String,
    pub message: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            required: true,
            min_length: None,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            email: EmailConfig::default(),
            postal: STANDARD_POSTAL_RULES
                .iter()
                .map(|(country, pattern, message)| PostalRuleConfig {
                    country: (*country).to_string(),
                    pattern: (*pattern).to_string(),
                    message: (*message).to_string(),
                })
                .collect(),
        }
    }
}

impl FormConfig {
    /// Compiles the country table.
    pub fn postal_rules(&self) -> FormResult<PostalRules> {
        let rules = self
            .postal
            .iter()
            .map(|row| {
                PostalRule::new(row.country.clone(), &row.pattern, row.message.clone()).map_err(
                    |source| FormError::InvalidPattern {
                        country: row.country.clone(),
                        source,
                    },
                )
            })
            .collect::<FormResult<Vec<_>>>()?;
        PostalRules::new(rules)
    }

    /// Validates the configuration and builds an engine from it.
    pub fn build(&self) -> FormResult<FieldValidator> {
        let rules = self.postal_rules()?;
        tracing::debug!(
            countries = rules.len(),
            email_required = self.email.required,
            email_min_length = ?self.email.min_length,
            "form validator configured"
        );
        Ok(FieldValidator::with_parts(
            rules,
            PasswordPolicy::standard(),
            Box::new(FallbackEmailCheck::new(
                self.email.required,
                self.email.min_length,
            )),
        ))
    }
}
