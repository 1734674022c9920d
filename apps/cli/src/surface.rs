//! A terminal rendering surface.
//!
//! Holds the "rendered" field values and queues one [`Record`] per write the
//! engine makes; the caller drains and prints them after every event.

use std::fmt;

use formwarden_validator::form::{Field, FieldErrorState, FormState};
use formwarden_validator::surface::FormSurface;
use serde::Serialize;

/// Something the terminal shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Record {
    Error {
        field: Field,
        invalid: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<&'static str>,
        message: String,
    },
    Accepted {
        data: FormState,
    },
    Rejected {
        field: Field,
    },
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Error {
                field,
                invalid: true,
                message,
                ..
            } => write!(f, "{field}: invalid {message:?}"),
            Record::Error { field, .. } => write!(f, "{field}: clear"),
            Record::Accepted { .. } => f.write_str("submission accepted"),
            Record::Rejected { field } => write!(f, "submission rejected at {field}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct TerminalSurface {
    values: FormState,
    pending: Vec<Record>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates what the user "typed" into `field`.
    pub fn type_into(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn push(&mut self, record: Record) {
        self.pending.push(record);
    }

    /// Takes every record queued since the last call.
    pub fn drain(&mut self) -> Vec<Record> {
        std::mem::take(&mut self.pending)
    }
}

impl FormSurface for TerminalSurface {
    fn value(&self, field: Field) -> String {
        self.values.get(field).to_string()
    }

    fn set_error(&mut self, field: Field, state: &FieldErrorState) {
        self.pending.push(Record::Error {
            field,
            invalid: state.is_invalid(),
            code: state.reason().map(|reason| reason.code()),
            message: state.message().to_string(),
        });
    }

    fn submission_accepted(&mut self, data: &FormState) {
        self.pending.push(Record::Accepted { data: data.clone() });
    }
}
