//! Domain error types.
//!
//! These errors represent validation failures of domain values. They are
//! distinct from I/O and parsing errors, which live in `ingest`.

use super::{InvalidSchedule, InvalidTransportMode, RestrictionKind};

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Transport mode label failed validation
    #[error(transparent)]
    TransportMode(#[from] InvalidTransportMode),

    /// Departure window failed validation
    #[error(transparent)]
    Schedule(#[from] InvalidSchedule),

    /// Optimisation mode is neither `cost` nor `duration`
    #[error("unknown optimisation mode {0:?}")]
    UnknownObjective(String),

    /// More restrictions than a request may carry
    #[error("at most 2 restrictions are allowed, got {0}")]
    TooManyRestrictions(usize),

    /// The same restriction kind given twice
    #[error("restriction {0} given more than once")]
    DuplicateRestriction(RestrictionKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::UnknownObjective("speed".into());
        assert_eq!(err.to_string(), "unknown optimisation mode \"speed\"");

        let err = DomainError::TooManyRestrictions(3);
        assert_eq!(err.to_string(), "at most 2 restrictions are allowed, got 3");

        let err = DomainError::DuplicateRestriction(RestrictionKind::MaxLegCost);
        assert_eq!(err.to_string(), "restriction A3 given more than once");
    }

    #[test]
    fn wraps_value_errors() {
        let err: DomainError = crate::domain::TransportMode::parse("")
            .unwrap_err()
            .into();
        assert!(err.to_string().contains("must not be empty"));

        let err: DomainError = crate::domain::Schedule::new(0, 10, 0).unwrap_err().into();
        assert!(err.to_string().contains("periodicity must be positive"));
    }
}
