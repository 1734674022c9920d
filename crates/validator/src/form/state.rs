//! Current raw field values

use serde::{Deserialize, Serialize};

use super::Field;

/// Raw text of every field. An empty string means untouched or cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub email: String,
    pub country: String,
    pub postal: String,
    pub password: String,
    pub confirmation: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Country => &self.country,
            Field::Postal => &self.postal,
            Field::Password => &self.password,
            Field::Confirmation => &self.confirmation,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Country => &mut self.country,
            Field::Postal => &mut self.postal,
            Field::Password => &mut self.password,
            Field::Confirmation => &mut self.confirmation,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}
