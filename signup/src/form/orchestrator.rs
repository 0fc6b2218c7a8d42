//! Full validation pass over a form.

use log::debug;

use super::feedback::render_feedback;
use super::port::{FeedbackTarget, FormPort};
use super::schema::FormSchema;
use crate::error::DomError;
use crate::validation::{Failure, FailureKind, Verdict, trim_value};

/// Information about a single failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    /// Input id, or the group name for a choice group.
    pub field_id: String,
    pub label: String,
    pub kind: FailureKind,
    pub message: String,
}

impl FieldFailure {
    fn new(field_id: &str, label: &str, failure: Failure) -> Self {
        Self {
            field_id: field_id.to_string(),
            label: label.to_string(),
            kind: failure.kind,
            message: failure.message.to_string(),
        }
    }
}

/// Result of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormReport {
    /// Every field and the choice group passed.
    #[default]
    Valid,
    /// Failures in validation order.
    Invalid(Vec<FieldFailure>),
}

impl FormReport {
    fn from_failures(failures: Vec<FieldFailure>) -> Self {
        if failures.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(failures)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[FieldFailure] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&FieldFailure> {
        self.errors().first()
    }

    /// Id of the first field that failed.
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.first_error().map(|e| e.field_id.as_str())
    }
}

/// Validate every field in order, then the choice group, rendering feedback
/// for each. All checks run even after a failure.
pub fn validate_form<P: FormPort + ?Sized>(
    port: &mut P,
    schema: &FormSchema,
) -> Result<FormReport, DomError> {
    let mut failures = Vec::new();

    for field in &schema.fields {
        let raw = port.input_value(field.id)?;
        let verdict = field
            .validator
            .evaluate(trim_value(&raw), |sibling| port.input_value(sibling))?;
        debug!("field '{}' -> {:?}", field.id, verdict);

        render_feedback(port, FeedbackTarget::Field(field.id), &verdict)?;
        if let Verdict::Invalid(failure) = verdict {
            failures.push(FieldFailure::new(field.id, field.label, failure));
        }
    }

    if let Some(group) = &schema.choice_group {
        let verdict = group.evaluate(port.any_checked(group.name)?);
        debug!("group '{}' -> {:?}", group.name, verdict);

        render_feedback(port, FeedbackTarget::Group(group.container_class), &verdict)?;
        if let Verdict::Invalid(failure) = verdict {
            failures.push(FieldFailure::new(group.name, group.label, failure));
        }
    }

    Ok(FormReport::from_failures(failures))
}
