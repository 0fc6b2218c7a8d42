//! Submit interception.

use log::{debug, error, info};

use super::orchestrator::{FormReport, validate_form};
use super::port::FormPort;
use super::schema::FormSchema;
use crate::error::DomError;

/// A submit event as delivered by the host.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the host from submitting the form on its own.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What the gate did with a submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Every check passed and the form was submitted.
    Submitted,
    /// At least one check failed; feedback is on the page.
    Blocked(FormReport),
}

impl GateOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// Validates a form on submit and only lets valid forms through.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    schema: FormSchema,
}

impl SubmitGate {
    pub fn new(schema: FormSchema) -> Self {
        Self { schema }
    }

    /// Handle one submit event.
    ///
    /// The event's default action is always prevented first. The form is then
    /// submitted through the port exactly once if the full pass is valid.
    pub fn handle<P: FormPort + ?Sized>(
        &self,
        port: &mut P,
        event: &mut SubmitEvent,
    ) -> Result<GateOutcome, DomError> {
        event.prevent_default();

        let report = validate_form(port, &self.schema).inspect_err(|e| {
            error!("Validation of '#{}' aborted: {}", self.schema.form_id, e);
        })?;

        if report.is_valid() {
            port.submit(self.schema.form_id)?;
            info!("Form '#{}' submitted", self.schema.form_id);
            Ok(GateOutcome::Submitted)
        } else {
            debug!(
                "Form '#{}' blocked with {} error(s), first: {:?}",
                self.schema.form_id,
                report.errors().len(),
                report.first_invalid_field()
            );
            Ok(GateOutcome::Blocked(report))
        }
    }
}
