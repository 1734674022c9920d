//! Form field identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// One of the five inputs of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Country,
    Postal,
    Password,
    #[serde(alias = "confirm")]
    Confirmation,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 5] = [
        Field::Email,
        Field::Country,
        Field::Postal,
        Field::Password,
        Field::Confirmation,
    ];

    /// Fields that carry an error state. The country selector has none.
    pub const VALIDATED: [Field; 4] = [
        Field::Email,
        Field::Postal,
        Field::Password,
        Field::Confirmation,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Country => "country",
            Field::Postal => "postal",
            Field::Password => "password",
            Field::Confirmation => "confirmation",
        }
    }

    pub const fn is_validated(self) -> bool {
        !matches!(self, Field::Country)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Field::Email),
            "country" => Ok(Field::Country),
            "postal" => Ok(Field::Postal),
            "password" => Ok(Field::Password),
            "confirmation" | "confirm" => Ok(Field::Confirmation),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}
