//! Binding the engine to a rendering surface
//!
//! A surface is whatever shows the form: a DOM, a terminal, a test double.
//! It answers "what is in this field now" and receives error-state writes.

use crate::engine::{FieldValidator, SubmitOutcome, Writes};
use crate::error::FormResult;
use crate::form::{EmailValidity, Field, FieldErrorState, FormState};

/// Capabilities the engine needs from a UI layer.
pub trait FormSurface {
    /// Current text of `field`.
    fn value(&self, field: Field) -> String;

    /// The host's native email check for the current email value, if it has
    /// one. `None` falls back to the engine's configured check.
    fn email_validity(&self) -> Option<EmailValidity> {
        None
    }

    /// Shows or clears the error marker and message of `field`.
    fn set_error(&mut self, field: Field, state: &FieldErrorState);

    /// Tells the user the form was accepted.
    fn submission_accepted(&mut self, data: &FormState);
}

/// Owns a [`FieldValidator`] and the surface it renders to.
///
/// Event handlers pull the new value from the surface, run the engine and
/// push every resulting write back.
#[derive(Debug)]
pub struct FormBinding<S> {
    validator: FieldValidator,
    surface: S,
}

impl<S: FormSurface> FormBinding<S> {
    pub fn new(validator: FieldValidator, surface: S) -> Self {
        Self { validator, surface }
    }

    /// A field's value changed on the surface.
    pub fn on_input(&mut self, field: Field) -> FormResult<()> {
        let value = self.surface.value(field);
        let writes = match (field, self.surface.email_validity()) {
            (Field::Email, Some(validity)) => self.validator.input_email(value, validity),
            _ => self.validator.input(field, value)?,
        };
        self.apply(&writes);
        Ok(())
    }

    /// The country selector changed on the surface.
    pub fn on_country_change(&mut self) -> FormResult<()> {
        self.on_input(Field::Country)
    }

    /// The user submitted.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let submission = self.validator.submit();
        self.apply(&submission.writes);
        if let SubmitOutcome::Accepted(data) = &submission.outcome {
            self.surface.submission_accepted(data);
        }
        submission.outcome
    }

    fn apply(&mut self, writes: &Writes) {
        for write in writes {
            self.surface.set_error(write.field, &write.state);
        }
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (FieldValidator, S) {
        (self.validator, self.surface)
    }
}
