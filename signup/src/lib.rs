//! Registration form validation.
//!
//! The validation core (`validation`, `form`) talks to the page only through
//! the port traits in [`form::port`]. [`adapter::DomForm`] implements them
//! over a [`formdom::Document`].

pub mod adapter;
pub mod error;
pub mod form;
pub mod page;
pub mod validation;

pub use adapter::{DomForm, Submission};
pub use error::DomError;
pub use form::{
    ChoiceGroup, FieldDescriptor, FieldFailure, FormReport, FormSchema, GateOutcome,
    PasswordToggle, SubmitEvent, SubmitGate, ToggleBinding, Validator, REGISTRATION_FIELDS,
    validate_form,
};
pub use validation::{Failure, FailureKind, Verdict};
