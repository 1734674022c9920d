//! The sign-up form model
//!
//! Values live in [`FormState`], error states in [`FormErrors`]. The check
//! functions in this module are pure: they take the values they depend on and
//! return a [`FieldErrorState`]. Sequencing (cascades, submit order) lives in
//! [`engine`](crate::engine).

mod email;
mod field;
mod reason;
mod rules;
mod state;
mod status;

pub use email::{EmailConstraint, EmailValidity, FallbackEmailCheck, check_email};
pub use field::Field;
pub use reason::{Format, PASSWORD_HINT, Reason};
pub use rules::{GENERIC_POSTAL_HINT, check_confirmation, check_password, check_postal};
pub use state::FormState;
pub use status::{FieldErrorState, FormErrors};
