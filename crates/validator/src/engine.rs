//! The field validation state machine
//!
//! [`FieldValidator`] owns the current values and error states and sequences
//! the pure checks from [`form`](crate::form): a password change re-checks a
//! non-empty confirmation, a country change re-checks the postal code, and a
//! submit walks the fields in form order and stops at the first failure.
//!
//! Every operation returns the error-state writes it made, in order, so a
//! rendering surface can replay them verbatim.

use smallvec::SmallVec;

use crate::error::{FormError, FormResult};
use crate::form::{
    EmailConstraint, EmailValidity, FallbackEmailCheck, Field, FieldErrorState, FormErrors,
    FormState, Reason, check_confirmation, check_email, check_password, check_postal,
};
use crate::validators::{PasswordPolicy, PostalRules};

// ============================================================================
// EVENTS AND OUTCOMES
// ============================================================================

/// One error-state write produced by a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWrite {
    pub field: Field,
    pub state: FieldErrorState,
}

/// Writes produced by one event. Most events touch one or two fields.
pub type Writes = SmallVec<[FieldWrite; 4]>;

/// An input event from the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value changed. For the email field the configured
    /// [`EmailConstraint`] supplies the validity report.
    Input { field: Field, value: String },
    /// The email changed and the host already ran its native check.
    EmailInput {
        value: String,
        validity: EmailValidity,
    },
    /// The country selector changed. An empty code clears the selection.
    CountryChanged { code: String },
    /// The user asked to submit the form.
    Submit,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every check passed; carries the submitted values.
    Accepted(FormState),
    /// The first failing field in form order.
    Rejected { field: Field },
}

/// Writes and outcome of [`FieldValidator::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub writes: Writes,
    pub outcome: SubmitOutcome,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, SubmitOutcome::Accepted(_))
    }
}

/// Result of [`FieldValidator::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub writes: Writes,
    /// Set only for [`FormEvent::Submit`].
    pub outcome: Option<SubmitOutcome>,
}

impl From<Writes> for Dispatch {
    fn from(writes: Writes) -> Self {
        Self {
            writes,
            outcome: None,
        }
    }
}

impl From<Submission> for Dispatch {
    fn from(submission: Submission) -> Self {
        Self {
            writes: submission.writes,
            outcome: Some(submission.outcome),
        }
    }
}

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// Holds the form's values and error states and applies the rules.
///
/// ```rust
/// use formwarden_validator::engine::{FieldValidator, SubmitOutcome};
/// use formwarden_validator::form::Field;
///
/// let mut form = FieldValidator::new();
/// form.input(Field::Email, "a@b.co")?;
/// form.select_country("ch")?;
/// form.input(Field::Postal, "1950")?;
/// form.input(Field::Password, "Abc1!234")?;
/// form.input(Field::Confirmation, "Abc1!234")?;
///
/// assert!(matches!(form.submit().outcome, SubmitOutcome::Accepted(_)));
/// # Ok::<(), formwarden_validator::error::FormError>(())
/// ```
pub struct FieldValidator {
    state: FormState,
    errors: FormErrors,
    email_validity: EmailValidity,
    postal_rules: PostalRules,
    password_policy: PasswordPolicy,
    email_check: Box<dyn EmailConstraint>,
}

impl std::fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldValidator")
            .field("state", &self.state)
            .field("errors", &self.errors)
            .field("email_validity", &self.email_validity)
            .field("postal_rules", &self.postal_rules.len())
            .finish_non_exhaustive()
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator {
    /// Standard country table, standard password policy, and the fallback
    /// email check with the field required and no minimum length.
    pub fn new() -> Self {
        Self::with_parts(
            PostalRules::standard(),
            PasswordPolicy::standard(),
            Box::new(FallbackEmailCheck::default()),
        )
    }

    pub(crate) fn with_parts(
        postal_rules: PostalRules,
        password_policy: PasswordPolicy,
        email_check: Box<dyn EmailConstraint>,
    ) -> Self {
        let email_validity = email_check.check("");
        Self {
            state: FormState::new(),
            errors: FormErrors::default(),
            email_validity,
            postal_rules,
            password_policy,
            email_check,
        }
    }

    /// Replaces the country table.
    #[must_use]
    pub fn with_postal_rules(mut self, rules: PostalRules) -> Self {
        self.postal_rules = rules;
        self
    }

    /// Replaces the email check, e.g. with the host's native one.
    #[must_use]
    pub fn with_email_constraint(mut self, check: impl EmailConstraint + 'static) -> Self {
        self.email_validity = check.check(&self.state.email);
        self.email_check = Box::new(check);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn email_validity(&self) -> EmailValidity {
        self.email_validity
    }

    pub fn postal_rules(&self) -> &PostalRules {
        &self.postal_rules
    }

    // ------------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------------

    /// Dispatches one event.
    pub fn handle(&mut self, event: FormEvent) -> FormResult<Dispatch> {
        match event {
            FormEvent::Input { field, value } => self.input(field, value).map(Dispatch::from),
            FormEvent::EmailInput { value, validity } => {
                Ok(self.input_email(value, validity).into())
            }
            FormEvent::CountryChanged { code } => self.select_country(code).map(Dispatch::from),
            FormEvent::Submit => Ok(self.submit().into()),
        }
    }

    /// A field's value changed.
    pub fn input(&mut self, field: Field, value: impl Into<String>) -> FormResult<Writes> {
        let value = value.into();
        let mut writes = Writes::new();
        match field {
            Field::Email => {
                let validity = self.email_check.check(&value);
                return Ok(self.input_email(value, validity));
            }
            Field::Country => return self.select_country(value),
            Field::Postal => {
                self.state.postal = value;
                self.validate_postal(&mut writes);
            }
            Field::Password => {
                self.state.password = value;
                self.validate_password(&mut writes);
            }
            Field::Confirmation => {
                self.state.confirmation = value;
                self.validate_confirmation(&mut writes);
            }
        }
        Ok(writes)
    }

    /// The email changed and the host supplied its own validity report.
    pub fn input_email(&mut self, value: impl Into<String>, validity: EmailValidity) -> Writes {
        self.state.email = value.into();
        self.email_validity = validity;
        let mut writes = Writes::new();
        self.validate_email(&mut writes);
        writes
    }

    /// The country selector changed; re-checks the postal code.
    ///
    /// Fails without touching any state when `code` has no postal rule.
    pub fn select_country(&mut self, code: impl Into<String>) -> FormResult<Writes> {
        let code = code.into();
        if !code.is_empty() && !self.postal_rules.contains(&code) {
            tracing::warn!(country = %code, "country without a postal rule selected");
            return Err(FormError::UnknownCountry(code));
        }
        self.state.country = code;
        let mut writes = Writes::new();
        self.validate_postal(&mut writes);
        Ok(writes)
    }

    /// Attempts a submission.
    ///
    /// Only the first failing field, in form order, is re-reported. When
    /// nothing fails, every error state is cleared and the values are
    /// returned in [`SubmitOutcome::Accepted`].
    pub fn submit(&mut self) -> Submission {
        let mut writes = Writes::new();

        let blocked = if !self.email_validity.is_valid() {
            self.validate_email(&mut writes);
            Some(Field::Email)
        } else if self.state.country.is_empty() {
            self.write(
                &mut writes,
                Field::Postal,
                FieldErrorState::active(Field::Postal, Reason::NoCountrySelected),
            );
            Some(Field::Postal)
        } else if self.errors.is_invalid(Field::Postal) {
            self.validate_postal(&mut writes);
            Some(Field::Postal)
        } else if self.errors.is_invalid(Field::Password) {
            self.validate_password(&mut writes);
            Some(Field::Password)
        } else if self.errors.is_invalid(Field::Confirmation) {
            self.validate_confirmation(&mut writes);
            Some(Field::Confirmation)
        } else {
            None
        };

        let outcome = match blocked {
            Some(field) => {
                tracing::debug!(field = %field, "submission rejected");
                SubmitOutcome::Rejected { field }
            }
            None => {
                for field in Field::VALIDATED {
                    self.write(&mut writes, field, FieldErrorState::Clear);
                }
                tracing::info!("submission accepted");
                SubmitOutcome::Accepted(self.state.clone())
            }
        };

        Submission { writes, outcome }
    }

    // ------------------------------------------------------------------------
    // Validation passes
    // ------------------------------------------------------------------------

    fn validate_email(&mut self, writes: &mut Writes) {
        let state = check_email(&self.state.email, &self.email_validity);
        self.write(writes, Field::Email, state);
    }

    fn validate_postal(&mut self, writes: &mut Writes) {
        let state = check_postal(&self.state, &self.postal_rules);
        self.write(writes, Field::Postal, state);
    }

    fn validate_password(&mut self, writes: &mut Writes) {
        let state = check_password(&self.state.password, &self.password_policy);
        self.write(writes, Field::Password, state);

        if !self.state.confirmation.is_empty() {
            tracing::debug!("password changed, re-checking confirmation");
            self.validate_confirmation(writes);
        }
    }

    fn validate_confirmation(&mut self, writes: &mut Writes) {
        let state = check_confirmation(&self.state, &self.errors.password);
        self.write(writes, Field::Confirmation, state);
    }

    fn write(&mut self, writes: &mut Writes, field: Field, state: FieldErrorState) {
        tracing::debug!(
            field = %field,
            invalid = state.is_invalid(),
            message = state.message(),
            "error state written"
        );
        if self.errors.set(field, state.clone()) {
            writes.push(FieldWrite { field, state });
        }
    }
}
