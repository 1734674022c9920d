//! Pure per-field checks
//!
//! Each function reads the values it depends on and returns the new error
//! state of exactly one field. Nothing here mutates anything.

use std::borrow::Cow;

use crate::foundation::Validate;
use crate::validators::{PasswordPolicy, PostalRules};

use super::{Field, FieldErrorState, Format, FormState, Reason};

/// Hint used when the selected country has no rule.
pub const GENERIC_POSTAL_HINT: &str = "Invalid postal code";

/// Postal code against the currently selected country.
pub fn check_postal(state: &FormState, rules: &PostalRules) -> FieldErrorState {
    let country = state.country.as_str();
    let postal = state.postal.as_str();

    if country.is_empty() {
        if postal.is_empty() {
            return FieldErrorState::Clear;
        }
        return FieldErrorState::active(Field::Postal, Reason::NoCountrySelected);
    }
    if postal.is_empty() {
        return FieldErrorState::active(Field::Postal, Reason::Empty);
    }

    let hint = match rules.get(country) {
        Some(rule) => match rule.validate(postal) {
            Ok(()) => return FieldErrorState::Clear,
            Err(err) => err.message,
        },
        None => Cow::Borrowed(GENERIC_POSTAL_HINT),
    };
    FieldErrorState::active(
        Field::Postal,
        Reason::FormatInvalid(Format::PostalCode {
            country: country.to_string(),
            hint,
        }),
    )
}

/// Password against the policy.
pub fn check_password(password: &str, policy: &PasswordPolicy) -> FieldErrorState {
    if password.is_empty() {
        FieldErrorState::active(Field::Password, Reason::Empty)
    } else if policy.validate(password).is_err() {
        FieldErrorState::active(Field::Password, Reason::FormatInvalid(Format::Password))
    } else {
        FieldErrorState::Clear
    }
}

/// Confirmation against the password value and the password's own state.
///
/// Precedence: empty, mismatch, then invalid password.
pub fn check_confirmation(state: &FormState, password_state: &FieldErrorState) -> FieldErrorState {
    let reason = if state.confirmation.is_empty() {
        Reason::Empty
    } else if state.confirmation != state.password {
        Reason::Mismatch
    } else if password_state.is_invalid() {
        Reason::DependentFieldInvalid
    } else {
        return FieldErrorState::Clear;
    };
    FieldErrorState::active(Field::Confirmation, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postal(country: &str, postal: &str) -> FieldErrorState {
        let state = FormState::new()
            .with(Field::Country, country)
            .with(Field::Postal, postal);
        check_postal(&state, &PostalRules::standard())
    }

    #[test]
    fn test_postal_state_machine() {
        assert_eq!(postal("", ""), FieldErrorState::Clear);
        assert_eq!(postal("", "1950").message(), "Select a country above");
        assert_eq!(postal("", "garbage").message(), "Select a country above");
        assert_eq!(postal("fr", "").message(), "This field cannot be empty");
        assert_eq!(postal("fr", "F-75012"), FieldErrorState::Clear);
        assert_eq!(
            postal("fr", "7501").message(),
            "French postal codes must have exactly 5 digits: e.g. F-75012 or 75012"
        );
    }

    #[test]
    fn test_postal_unknown_country_uses_generic_hint() {
        let state = postal("it", "00100");
        assert_eq!(state.message(), GENERIC_POSTAL_HINT);
        assert_eq!(state.reason().map(Reason::code), Some("postal_format"));
    }

    #[test]
    fn test_password() {
        let policy = PasswordPolicy::standard();
        assert_eq!(check_password("Abc1!234", &policy), FieldErrorState::Clear);
        assert_eq!(
            check_password("", &policy).reason(),
            Some(&Reason::Empty)
        );
        assert_eq!(
            check_password("abc12345", &policy).reason(),
            Some(&Reason::FormatInvalid(Format::Password))
        );
    }

    #[test]
    fn test_confirmation_precedence() {
        let bad_password = FieldErrorState::active(Field::Password, Reason::FormatInvalid(Format::Password));

        let empty = FormState::new().with(Field::Password, "x");
        assert_eq!(check_confirmation(&empty, &bad_password).reason(), Some(&Reason::Empty));

        let mismatch = empty.clone().with(Field::Confirmation, "y");
        assert_eq!(
            check_confirmation(&mismatch, &bad_password).reason(),
            Some(&Reason::Mismatch)
        );

        let same = empty.with(Field::Confirmation, "x");
        assert_eq!(
            check_confirmation(&same, &bad_password).reason(),
            Some(&Reason::DependentFieldInvalid)
        );
        assert_eq!(
            check_confirmation(&same, &FieldErrorState::Clear),
            FieldErrorState::Clear
        );
    }
}
