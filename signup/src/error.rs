//! Integration errors.
//!
//! A failed field check is a [`Verdict`](crate::Verdict), not an error. The
//! errors here mean the page does not have the structure the form scripts
//! expect, which is a setup bug rather than something a user can cause.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// No element with the given id exists.
    #[error("Element '#{id}' not found")]
    MissingElement { id: String },

    /// The element has no ancestor (or self) with the container class.
    #[error("Element '#{id}' has no '.{class}' container")]
    MissingContainer { id: String, class: String },

    /// The container holds no error display element.
    #[error("Container '{container}' has no error slot")]
    MissingErrorSlot { container: String },

    /// Nothing carrying the class sits next to the element.
    #[error("Element '#{id}' has no '.{class}' sibling")]
    MissingSibling { id: String, class: String },

    /// The element exists but is not an input.
    #[error("Element '#{id}' is not an input")]
    NotAnInput { id: String },

    /// The form to submit does not exist.
    #[error("Form '#{id}' not found")]
    MissingForm { id: String },
}

impl DomError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}
