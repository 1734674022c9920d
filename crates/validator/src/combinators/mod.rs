//! Rule combinators
//!
//! - [`And`]: both rules must pass, first failure wins
//! - [`WithMessage`]: replace a failure message, keep the cause nested

pub mod and;
pub mod message;

pub use and::And;
pub use message::WithMessage;
