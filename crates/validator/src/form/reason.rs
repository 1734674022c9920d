//! Why a field is invalid, and what the user is told.

use std::borrow::Cow;

use super::Field;

/// Hint shown under the password field when the policy rejects it.
pub const PASSWORD_HINT: &str = "Must contain at least 8 characters, one lowercase letter, one uppercase letter, one number, one special character: @$!%*?#&_";

/// The formats a value can fail to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    /// Not shaped like an email address.
    Email,
    /// Email shorter than the configured minimum, in UTF-16 code units.
    EmailTooShort { min: usize, actual: usize },
    /// Rejected by the password policy.
    Password,
    /// Does not match the selected country's postal rule.
    PostalCode {
        country: String,
        hint: Cow<'static, str>,
    },
}

/// Input validation failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    Empty,
    FormatInvalid(Format),
    NoCountrySelected,
    /// Confirmation differs from the password.
    Mismatch,
    /// Confirmation matches, but the password itself is invalid.
    DependentFieldInvalid,
}

impl Reason {
    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Reason::Empty => "empty",
            Reason::FormatInvalid(Format::Email) => "type_mismatch",
            Reason::FormatInvalid(Format::EmailTooShort { .. }) => "too_short",
            Reason::FormatInvalid(Format::Password) => "password_policy",
            Reason::FormatInvalid(Format::PostalCode { .. }) => "postal_format",
            Reason::NoCountrySelected => "no_country",
            Reason::Mismatch => "mismatch",
            Reason::DependentFieldInvalid => "password_invalid",
        }
    }

    /// The message displayed for this reason on `field`.
    ///
    /// The email field's messages are full sentences ending in a period; the
    /// other fields' are not.
    pub fn message(&self, field: Field) -> Cow<'static, str> {
        match self {
            Reason::Empty if field == Field::Email => "This field cannot be empty.".into(),
            Reason::Empty => "This field cannot be empty".into(),
            Reason::FormatInvalid(Format::Email) => "You need to enter an email address.".into(),
            Reason::FormatInvalid(Format::EmailTooShort { min, actual }) => {
                format!("Email should be at least {min} characters; you entered {actual}.").into()
            }
            Reason::FormatInvalid(Format::Password) => PASSWORD_HINT.into(),
            Reason::FormatInvalid(Format::PostalCode { hint, .. }) => hint.clone(),
            Reason::NoCountrySelected => "Select a country above".into(),
            Reason::Mismatch => "Must match the password".into(),
            Reason::DependentFieldInvalid => "Password must be valid".into(),
        }
    }
}
