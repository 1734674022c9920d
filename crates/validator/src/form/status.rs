//! Per-field error state

use std::borrow::Cow;

use super::{Field, Reason};

/// Error state of one validated field.
///
/// The "invalid" marker and the message come from the same variant, so a
/// surface can never show one without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldErrorState {
    #[default]
    Clear,
    Active {
        reason: Reason,
        message: Cow<'static, str>,
    },
}

impl FieldErrorState {
    /// Activates `reason` on `field`, resolving its message.
    pub fn active(field: Field, reason: Reason) -> Self {
        let message = reason.message(field);
        FieldErrorState::Active { reason, message }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldErrorState::Active { .. })
    }

    pub fn reason(&self) -> Option<&Reason> {
        match self {
            FieldErrorState::Clear => None,
            FieldErrorState::Active { reason, .. } => Some(reason),
        }
    }

    /// The message to display; empty when clear.
    pub fn message(&self) -> &str {
        match self {
            FieldErrorState::Clear => "",
            FieldErrorState::Active { message, .. } => message,
        }
    }
}

/// Error states of the four validated fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: FieldErrorState,
    pub postal: FieldErrorState,
    pub password: FieldErrorState,
    pub confirmation: FieldErrorState,
}

impl FormErrors {
    /// The state of `field`, or `None` for the country selector.
    pub fn get(&self, field: Field) -> Option<&FieldErrorState> {
        match field {
            Field::Email => Some(&self.email),
            Field::Postal => Some(&self.postal),
            Field::Password => Some(&self.password),
            Field::Confirmation => Some(&self.confirmation),
            Field::Country => None,
        }
    }

    /// Whether `field` currently carries the invalid marker.
    pub fn is_invalid(&self, field: Field) -> bool {
        self.get(field).is_some_and(FieldErrorState::is_invalid)
    }

    /// Stores `state` for `field`. Returns false for the country selector,
    /// which has no error slot.
    pub(crate) fn set(&mut self, field: Field, state: FieldErrorState) -> bool {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Postal => &mut self.postal,
            Field::Password => &mut self.password,
            Field::Confirmation => &mut self.confirmation,
            Field::Country => return false,
        };
        *slot = state;
        true
    }

    /// Fields currently marked invalid, in form order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::VALIDATED
            .into_iter()
            .filter(|field| self.is_invalid(*field))
    }

    pub fn all_clear(&self) -> bool {
        self.invalid_fields().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_and_message_move_together() {
        let clear = FieldErrorState::Clear;
        assert!(!clear.is_invalid());
        assert_eq!(clear.message(), "");

        let active = FieldErrorState::active(Field::Confirmation, Reason::Mismatch);
        assert!(active.is_invalid());
        assert_eq!(active.message(), "Must match the password");
        assert_eq!(active.reason(), Some(&Reason::Mismatch));
    }

    #[test]
    fn test_country_has_no_slot() {
        let mut errors = FormErrors::default();
        assert!(errors.get(Field::Country).is_none());
        assert!(!errors.set(
            Field::Country,
            FieldErrorState::active(Field::Country, Reason::Empty)
        ));
        assert!(errors.all_clear());
    }

    #[test]
    fn test_invalid_fields_in_form_order() {
        let mut errors = FormErrors::default();
        errors.set(
            Field::Confirmation,
            FieldErrorState::active(Field::Confirmation, Reason::Empty),
        );
        errors.set(Field::Postal, FieldErrorState::active(Field::Postal, Reason::NoCountrySelected));
        let invalid: Vec<_> = errors.invalid_fields().collect();
        assert_eq!(invalid, [Field::Postal, Field::Confirmation]);
    }
}
