//! Inline feedback on field containers.

use super::port::{FeedbackTarget, FormPort};
use crate::error::DomError;
use crate::validation::Verdict;

/// Markup placed before every error message.
pub const ERROR_ICON: &str = r#"<i class="fa-solid fa-circle-exclamation"></i>"#;

/// Visual state class applied to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMarker {
    Valid,
    Invalid,
}

impl StateMarker {
    pub const ALL: [StateMarker; 2] = [StateMarker::Valid, StateMarker::Invalid];

    pub fn class(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }

    pub fn for_verdict(verdict: &Verdict) -> Self {
        if verdict.is_valid() {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// The error slot markup for a message.
pub fn error_html(message: &str) -> String {
    format!("{ERROR_ICON} {message}")
}

/// Reset the target to neutral, then apply the verdict.
///
/// Applying the same verdict twice leaves the same state as applying it once.
pub fn render_feedback<P: FormPort + ?Sized>(
    port: &mut P,
    target: FeedbackTarget<'_>,
    verdict: &Verdict,
) -> Result<(), DomError> {
    port.clear_markers(target)?;
    port.set_error_html(target, "")?;

    port.add_marker(target, StateMarker::for_verdict(verdict))?;
    if let Some(message) = verdict.error_message() {
        port.set_error_html(target, &error_html(message))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FailureKind, messages};

    #[test]
    fn test_error_html_prefixes_icon() {
        assert_eq!(
            error_html(messages::BIRTHDATE_INVALID),
            r#"<i class="fa-solid fa-circle-exclamation"></i> Data inválida!"#
        );
    }

    #[test]
    fn test_marker_for_verdict() {
        assert_eq!(StateMarker::for_verdict(&Verdict::Valid), StateMarker::Valid);
        let invalid = Verdict::invalid(FailureKind::Required, messages::EMAIL_REQUIRED);
        assert_eq!(StateMarker::for_verdict(&invalid).class(), "invalid");
    }
}
