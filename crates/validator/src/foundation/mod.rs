//! Core rule types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Rules are generic over their input type and compose with `.and()`:
//!
//! ```rust
//! use formwarden_validator::foundation::{Validate, ValidateExt};
//! use formwarden_validator::validators::{min_length, not_empty};
//!
//! let rule = not_empty().and(min_length(3));
//! assert!(rule.validate("abc").is_ok());
//! assert!(rule.validate("ab").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
