//! The grading engine: validation, rank-sequence normalization, and
//! strategy dispatch.
//!
//! Each call is a single pure evaluation. The engine keeps no state
//! across calls, so independent (correct order, submission) pairs can
//! be graded concurrently without synchronization.

use crate::error::GradeError;
use crate::model::{CorrectOrder, GradingStrategy, Submission};
use crate::scoring;
use crate::validate::validate;

/// Rewrite a validated submission as the sequence of correct ranks of
/// its elements.
///
/// Submission `[C, A, B]` over correct order `[A, B, C]` yields
/// `[2, 0, 1]`. Validation runs first; a malformed submission is
/// rejected before any transformation.
pub fn rank_sequence(
    correct: &CorrectOrder,
    submission: &Submission,
) -> Result<Vec<usize>, GradeError> {
    validate(correct, submission)?;

    let mut ranks = Vec::with_capacity(submission.len());
    for item in submission.items() {
        match correct.rank_of(item) {
            Some(rank) => ranks.push(rank),
            None => return Err(GradeError::ForeignItem { item: item.clone() }),
        }
    }
    tracing::trace!(?ranks, "normalized submission to rank sequence");
    Ok(ranks)
}

/// Grade a submission against a correct order under a strategy.
///
/// This is the operation exposed to host question engines. The
/// returned fraction is in [0, 1]; mapping it to a qualitative state
/// (right / partial / wrong) is the host's concern, as is persisting
/// the attempt.
pub fn grade(
    correct: &CorrectOrder,
    submission: &Submission,
    strategy: GradingStrategy,
) -> Result<f64, GradeError> {
    let ranks = rank_sequence(correct, submission)?;
    let fraction = score_ranks(&ranks, strategy);
    tracing::debug!(strategy = %strategy, fraction, "graded submission");
    Ok(fraction)
}

/// Apply a strategy's algorithm to an already-normalized rank
/// sequence.
///
/// Dispatch is total: the enumeration is closed, and every tag maps to
/// exactly one pure function.
pub fn score_ranks(ranks: &[usize], strategy: GradingStrategy) -> f64 {
    match strategy {
        GradingStrategy::AllOrNothing => scoring::all_or_nothing(ranks),
        GradingStrategy::AbsolutePosition => scoring::absolute_position(ranks),
        GradingStrategy::RelativeNextExcludeLast => scoring::relative_next(ranks, false),
        GradingStrategy::RelativeNextIncludeLast => scoring::relative_next(ranks, true),
        GradingStrategy::RelativeOnePreviousAndNext => scoring::one_previous_and_next(ranks),
        GradingStrategy::RelativeAllPreviousAndNext => scoring::all_previous_and_next(ranks),
        GradingStrategy::LongestOrderedSubset => scoring::longest_ordered_subset(ranks),
        GradingStrategy::LongestContiguousSubset => scoring::longest_contiguous_subset(ranks),
        GradingStrategy::RelativeToCorrect => scoring::relative_to_correct(ranks),
    }
}
