//! Field validators for the registration form.
//!
//! Every validator takes the trimmed field value and returns a [`Verdict`].
//! Rules run in a fixed order and the first failing rule decides the
//! message, so a field never reports more than one error at a time.
//! Malformed input is always an `Invalid` verdict, never a panic.
//!
//! # Example
//!
//! ```
//! use signup::validation::{FailureKind, name_is_valid};
//!
//! assert!(name_is_valid("Joaozinho").is_valid());
//! assert_eq!(name_is_valid("João").kind(), Some(FailureKind::TooShort));
//! ```

pub mod messages;
mod rules;
mod verdict;

pub use rules::{
    MIN_BIRTH_YEAR, MIN_NAME_LEN, MIN_PASSWORD_LEN, date_is_valid, date_is_valid_in,
    email_is_valid, name_is_valid, password_is_secure, passwords_match, trim_value,
};
pub use verdict::{Failure, FailureKind, Verdict};
