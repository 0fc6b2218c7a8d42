//! Form-level validation: registry, feedback, orchestration, submit gate and
//! password visibility.

pub mod feedback;
mod gate;
mod orchestrator;
pub mod port;
mod registry;
mod schema;
pub mod toggle;

pub use feedback::{ERROR_ICON, StateMarker, error_html, render_feedback};
pub use gate::{GateOutcome, SubmitEvent, SubmitGate};
pub use orchestrator::{FieldFailure, FormReport, validate_form};
pub use port::{FeedbackTarget, FormPort, VisibilityPort};
pub use registry::{ChoiceGroup, FieldDescriptor, GENDER_GROUP, REGISTRATION_FIELDS, Validator};
pub use schema::FormSchema;
pub use toggle::{Masking, PasswordToggle, ToggleBinding};
