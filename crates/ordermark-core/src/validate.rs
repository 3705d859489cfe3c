//! Submission well-formedness checks.
//!
//! A submission is scoreable only if it contains exactly the same
//! multiset of identifiers as the correct order: no omissions, no
//! duplicates, no foreign identifiers. Checks run in a fixed order and
//! fail fast, so hosts get a stable first diagnosis for a malformed
//! attempt.

use crate::error::GradeError;
use crate::model::{CorrectOrder, Submission};

/// Validate a submission against a correct order.
///
/// Checks, in order:
///
/// 1. the submission has exactly as many items as the correct order;
/// 2. every submitted identifier belongs to the correct order
///    (reported for the first offender in submission order);
/// 3. every correct-order identifier occurs in the submission exactly
///    once: more than once is a duplicate, zero times a missing item
///    (reported for the first offender in correct order).
///
/// The first violated invariant is returned; malformed input is never
/// partially scored.
pub fn validate(correct: &CorrectOrder, submission: &Submission) -> Result<(), GradeError> {
    if submission.len() != correct.len() {
        return Err(GradeError::LengthMismatch {
            expected: correct.len(),
            actual: submission.len(),
        });
    }

    for item in submission.items() {
        if !correct.contains(item) {
            return Err(GradeError::ForeignItem { item: item.clone() });
        }
    }

    // Lengths match and nothing is foreign, so per-identifier
    // occurrence counts decide between duplicate and missing.
    let mut occurrences = vec![0usize; correct.len()];
    for item in submission.items() {
        if let Some(rank) = correct.rank_of(item) {
            occurrences[rank] += 1;
        }
    }
    for (rank, item) in correct.items().iter().enumerate() {
        match occurrences[rank] {
            1 => {}
            0 => return Err(GradeError::MissingItem { item: item.clone() }),
            _ => return Err(GradeError::DuplicateItem { item: item.clone() }),
        }
    }

    Ok(())
}
