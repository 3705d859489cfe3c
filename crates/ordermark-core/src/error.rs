//! Grading error taxonomy.
//!
//! Every variant is a synchronous, non-retryable contract violation by
//! the caller: a malformed submission or a host misconfiguration. The
//! engine returns a typed failure rather than a best-effort score for
//! malformed input; what to show the learner is the host's decision.

use thiserror::Error;

/// Errors returned by construction, validation, and grading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    /// A correct order must contain at least one item.
    #[error("correct order must contain at least one item")]
    EmptyOrder,

    /// The submission does not have the same number of items as the
    /// correct order.
    #[error("submission has {actual} item(s), expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An identifier occurs more than once.
    #[error("duplicate item: {item}")]
    DuplicateItem { item: String },

    /// A correct-order identifier is absent from the submission.
    #[error("missing item: {item}")]
    MissingItem { item: String },

    /// The submission references an identifier the correct order does
    /// not contain.
    #[error("foreign item: {item}")]
    ForeignItem { item: String },

    /// A strategy tag outside the closed enumeration.
    #[error("unknown grading strategy: {name}")]
    UnknownStrategy { name: String },
}

impl GradeError {
    /// Returns `true` if the error describes a malformed submission,
    /// as opposed to a host-side mistake (empty order, bad strategy
    /// tag). Hosts typically refuse to submit on the former and fail
    /// loudly on the latter.
    pub fn is_malformed_submission(&self) -> bool {
        matches!(
            self,
            GradeError::LengthMismatch { .. }
                | GradeError::DuplicateItem { .. }
                | GradeError::MissingItem { .. }
                | GradeError::ForeignItem { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offender() {
        let err = GradeError::ForeignItem {
            item: "Gamma".into(),
        };
        assert_eq!(err.to_string(), "foreign item: Gamma");

        let err = GradeError::LengthMismatch {
            expected: 6,
            actual: 4,
        };
        assert_eq!(err.to_string(), "submission has 4 item(s), expected 6");
    }

    #[test]
    fn malformed_submission_classification() {
        assert!(GradeError::MissingItem { item: "A".into() }.is_malformed_submission());
        assert!(!GradeError::EmptyOrder.is_malformed_submission());
        assert!(!GradeError::UnknownStrategy { name: "x".into() }.is_malformed_submission());
    }
}
