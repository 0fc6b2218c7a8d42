/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The field was empty after trimming.
    Required,
    /// The value is shorter than the minimum length.
    TooShort,
    /// The value does not match the field's pattern.
    PatternMismatch,
    /// The date is unparseable or outside the accepted year range.
    OutOfRange,
    /// The confirmation differs from the password.
    Mismatch,
    /// No option of a choice group is checked.
    NoneSelected,
}

/// A failed check with its fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: &'static str,
}

/// Outcome of validating a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verdict {
    /// The value passed every rule.
    #[default]
    Valid,
    /// The first rule the value failed.
    Invalid(Failure),
}

impl Verdict {
    pub fn invalid(kind: FailureKind, message: &'static str) -> Self {
        Self::Invalid(Failure { kind, message })
    }

    /// Build a verdict from a boolean check.
    pub fn check(ok: bool, kind: FailureKind, message: &'static str) -> Self {
        if ok {
            Self::Valid
        } else {
            Self::invalid(kind, message)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Valid => None,
            Self::Invalid(failure) => Some(failure),
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.failure().map(|f| f.kind)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.failure().map(|f| f.message)
    }

    /// Keep `self` if it failed, otherwise evaluate the next rule.
    pub fn and_then(self, next: impl FnOnce() -> Verdict) -> Verdict {
        match self {
            Self::Valid => next(),
            invalid => invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failure_wins() {
        let verdict = Verdict::check(false, FailureKind::Required, "a")
            .and_then(|| Verdict::invalid(FailureKind::TooShort, "b"));
        assert_eq!(verdict.kind(), Some(FailureKind::Required));
        assert_eq!(verdict.error_message(), Some("a"));
    }

    #[test]
    fn test_valid_chains_into_next_rule() {
        let verdict = Verdict::Valid.and_then(|| Verdict::invalid(FailureKind::Mismatch, "m"));
        assert!(verdict.is_invalid());
        assert_eq!(verdict.kind(), Some(FailureKind::Mismatch));
        assert_eq!(Verdict::default().error_message(), None);
    }
}
