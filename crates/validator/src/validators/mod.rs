//! Built-in rule primitives
//!
//! - **Length**: [`NotEmpty`], [`MinLength`]
//! - **Content**: [`MatchesRegex`], [`EmailShape`]
//! - **Character classes**: [`RequiresChar`]
//! - **Form policies**: [`PasswordPolicy`], [`PostalRule`] / [`PostalRules`]

pub mod content;
pub mod length;
pub mod password;
pub mod pattern;
pub mod postal;

pub use content::{EMAIL_SHAPE_PATTERN, EmailShape, MatchesRegex, email_shape, matches_regex};
pub use length::{LengthMode, MinLength, NotEmpty, min_length, not_empty};
pub use password::{PASSWORD_CHARSET_PATTERN, PASSWORD_SPECIALS, PasswordPolicy};
pub use pattern::{RequiresChar, requires_char, requires_digit, requires_uppercase};
pub use postal::{PostalRule, PostalRules, STANDARD_POSTAL_RULES};
