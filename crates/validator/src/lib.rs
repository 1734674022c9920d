//! # formwarden-validator
//!
//! Client-side validation for a sign-up form with five inputs: email,
//! country, postal code, password and password confirmation.
//!
//! ## Quick Start
//!
//! ```rust
//! use formwarden_validator::prelude::*;
//!
//! let mut form = FieldValidator::new();
//! form.select_country("ch")?;
//! let writes = form.input(Field::Postal, "19500")?;
//! assert_eq!(
//!     writes[0].state.message(),
//!     "Swiss postal codes must have exactly 4 digits: e.g. CH-1950 or 1950"
//! );
//! # Ok::<(), FormError>(())
//! ```
//!
//! ## Layers
//!
//! - [`foundation`], [`combinators`], [`validators`]: generic string rules
//!   (regex, length, character classes) and the password and postal policies
//!   built from them.
//! - [`form`]: field identifiers, values, the failure taxonomy and the pure
//!   per-field checks.
//! - [`engine`]: [`FieldValidator`](engine::FieldValidator), which sequences
//!   the checks on input, country change and submit.
//! - [`surface`]: the capability trait a UI implements and a binding that
//!   drives the engine from it.
//! - [`config`]: serde configuration for the email constraints and country table.

// Deep combinator nesting (And<And<...>, ...>) produces complex types
// that are inherent to the combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod surface;
pub mod validators;
