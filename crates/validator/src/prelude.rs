//! Prelude module for convenient imports.
//!
//! `use formwarden_validator::prelude::*;` brings in the engine, the form
//! model, the surface binding and the rule traits.

pub use crate::config::{EmailConfig, FormConfig, PostalRuleConfig};
pub use crate::engine::{
    Dispatch, FieldValidator, FieldWrite, FormEvent, Submission, SubmitOutcome, Writes,
};
pub use crate::error::{FormError, FormResult};
pub use crate::form::{
    EmailConstraint, EmailValidity, FallbackEmailCheck, Field, FieldErrorState, FormErrors,
    FormState, Format, Reason,
};
pub use crate::foundation::{Validate, ValidateExt, ValidationError};
pub use crate::surface::{FormBinding, FormSurface};
pub use crate::validators::{PasswordPolicy, PostalRule, PostalRules};
