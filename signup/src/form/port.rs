//! Traits the validation core uses to reach the page.
//!
//! The core never touches a document directly. An adapter implements these
//! traits over whatever holds the real elements.

use super::feedback::StateMarker;
use super::toggle::Masking;
use crate::error::DomError;

/// Where feedback for one check is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTarget<'a> {
    /// The container around the input with this id.
    Field(&'a str),
    /// The first element carrying this container class.
    Group(&'a str),
}

impl std::fmt::Display for FeedbackTarget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(id) => write!(f, "#{id}"),
            Self::Group(class) => write!(f, ".{class}"),
        }
    }
}

/// Reads inputs, writes feedback and submits the form.
pub trait FormPort {
    /// The raw, untrimmed value of the input with `id`.
    fn input_value(&self, id: &str) -> Result<String, DomError>;

    /// Whether any input sharing `name` is checked.
    fn any_checked(&self, name: &str) -> Result<bool, DomError>;

    /// Remove every state marker from the target's container.
    fn clear_markers(&mut self, target: FeedbackTarget<'_>) -> Result<(), DomError>;

    /// Apply a state marker to the target's container.
    fn add_marker(&mut self, target: FeedbackTarget<'_>, marker: StateMarker)
    -> Result<(), DomError>;

    /// Replace the markup of the target's error display element.
    fn set_error_html(&mut self, target: FeedbackTarget<'_>, html: &str) -> Result<(), DomError>;

    /// Perform the form's own submission.
    fn submit(&mut self, form_id: &str) -> Result<(), DomError>;
}

/// Finds visibility icons and flips input masking.
pub trait VisibilityPort {
    /// Ids of every element carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<String>;

    /// Id of the first element with `class` inside the parent of `id`.
    fn query_in_parent(&self, id: &str, class: &str) -> Result<String, DomError>;

    fn masking(&self, input_id: &str) -> Result<Masking, DomError>;

    fn set_masking(&mut self, input_id: &str, masking: Masking) -> Result<(), DomError>;

    /// Toggle `class` on the element, returning whether it is now present.
    fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, DomError>;
}
