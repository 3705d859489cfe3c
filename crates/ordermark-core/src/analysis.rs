//! Per-item grading detail.
//!
//! The aggregate fraction answers "how much credit"; hosts also want
//! to know *which* items earned it, how many sit in exactly the right
//! place, and a plain-text rendering of the attempt for summaries.
//! Everything here is derived from the same validated rank sequence
//! the engine grades with.

use serde::{Deserialize, Serialize};

use crate::engine;
use crate::error::GradeError;
use crate::model::{CorrectOrder, GradingStrategy, Submission};
use crate::scoring;

/// Credit assigned to a single submitted item under one strategy.
///
/// `score` out of `max_score`, in the strategy's own units (number of
/// matched checks, concordant pairs, displacement credit, ...). Summed
/// over all items, `score / max_score` reproduces the aggregate
/// fraction exactly. Items that carry no check under a strategy (the
/// final correct item under relative-next-exclude-last) have
/// `max_score` 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCredit {
    /// The item identifier.
    pub item: String,
    /// Where the learner placed it (zero-based).
    pub position: usize,
    /// Where it belongs (zero-based correct rank).
    pub correct_rank: usize,
    /// Credit earned by this item.
    pub score: u32,
    /// Credit available to this item.
    pub max_score: u32,
}

/// A grade together with its per-item breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeDetails {
    /// The strategy that produced this grade.
    pub strategy: GradingStrategy,
    /// Aggregate fraction in [0, 1].
    pub fraction: f64,
    /// Per-item credit, in submission order.
    pub item_credits: Vec<ItemCredit>,
    /// Items sitting in their exact correct slot, independent of the
    /// strategy.
    pub correctly_placed: usize,
}

/// Grade a submission and return the per-item breakdown along with the
/// fraction.
pub fn grade_details(
    correct: &CorrectOrder,
    submission: &Submission,
    strategy: GradingStrategy,
) -> Result<GradeDetails, GradeError> {
    let ranks = engine::rank_sequence(correct, submission)?;
    Ok(GradeDetails {
        strategy,
        fraction: engine::score_ranks(&ranks, strategy),
        item_credits: credits_for_ranks(submission.items(), &ranks, strategy),
        correctly_placed: count_in_place(&ranks),
    })
}

/// Per-item credit for a validated submission under one strategy.
pub fn item_credits(
    correct: &CorrectOrder,
    submission: &Submission,
    strategy: GradingStrategy,
) -> Result<Vec<ItemCredit>, GradeError> {
    let ranks = engine::rank_sequence(correct, submission)?;
    Ok(credits_for_ranks(submission.items(), &ranks, strategy))
}

/// Count of submitted items sitting in their exact correct slot, the
/// "you have placed N item(s) correctly" figure, independent of the
/// selected strategy.
pub fn correctly_placed(
    correct: &CorrectOrder,
    submission: &Submission,
) -> Result<usize, GradeError> {
    let ranks = engine::rank_sequence(correct, submission)?;
    Ok(count_in_place(&ranks))
}

/// Canonical plain-text rendering of a submission for attempt
/// summaries: items joined with "; ".
pub fn summarise(submission: &Submission) -> String {
    submission.items().join("; ")
}

fn count_in_place(ranks: &[usize]) -> usize {
    ranks.iter().enumerate().filter(|&(i, &r)| r == i).count()
}

fn credits_for_ranks(
    items: &[String],
    ranks: &[usize],
    strategy: GradingStrategy,
) -> Vec<ItemCredit> {
    let n = ranks.len();
    let credit = |pos: usize, score: u32, max_score: u32| ItemCredit {
        item: items[pos].clone(),
        position: pos,
        correct_rank: ranks[pos],
        score,
        max_score,
    };

    if n <= 1 {
        return (0..n).map(|pos| credit(pos, 1, 1)).collect();
    }

    match strategy {
        GradingStrategy::AllOrNothing => {
            let hit = ranks.iter().enumerate().all(|(i, &r)| r == i) as u32;
            (0..n).map(|pos| credit(pos, hit, 1)).collect()
        }
        GradingStrategy::AbsolutePosition => (0..n)
            .map(|pos| credit(pos, (ranks[pos] == pos) as u32, 1))
            .collect(),
        GradingStrategy::RelativeNextExcludeLast | GradingStrategy::RelativeNextIncludeLast => {
            let include_last = strategy == GradingStrategy::RelativeNextIncludeLast;
            (0..n)
                .map(|pos| {
                    let rank = ranks[pos];
                    if rank < n - 1 {
                        let hit = pos < n - 1 && ranks[pos + 1] == rank + 1;
                        credit(pos, hit as u32, 1)
                    } else if include_last {
                        credit(pos, (pos == n - 1) as u32, 1)
                    } else {
                        credit(pos, 0, 0)
                    }
                })
                .collect()
        }
        GradingStrategy::RelativeOnePreviousAndNext => (0..n)
            .map(|pos| {
                let rank = ranks[pos];
                let mut score = 0;
                let mut max_score = 0;
                if rank > 0 {
                    max_score += 1;
                    if pos > 0 && ranks[pos - 1] == rank - 1 {
                        score += 1;
                    }
                }
                if rank < n - 1 {
                    max_score += 1;
                    if pos < n - 1 && ranks[pos + 1] == rank + 1 {
                        score += 1;
                    }
                }
                credit(pos, score, max_score)
            })
            .collect(),
        GradingStrategy::RelativeAllPreviousAndNext => (0..n)
            .map(|pos| {
                let rank = ranks[pos];
                let agreeing = (0..n)
                    .filter(|&other| other != pos)
                    .filter(|&other| (other < pos) == (ranks[other] < rank))
                    .count();
                credit(pos, agreeing as u32, (n - 1) as u32)
            })
            .collect(),
        GradingStrategy::LongestOrderedSubset => {
            membership_credits(items, ranks, &scoring::longest_ordered_positions(ranks))
        }
        GradingStrategy::LongestContiguousSubset => {
            membership_credits(items, ranks, &scoring::longest_contiguous_positions(ranks))
        }
        GradingStrategy::RelativeToCorrect => {
            let span = n - 1;
            (0..n)
                .map(|pos| {
                    let earned = span - pos.abs_diff(ranks[pos]);
                    credit(pos, earned as u32, span as u32)
                })
                .collect()
        }
    }
}

/// 1-of-1 credit for members of the chosen subset, 0-of-1 for the
/// rest.
fn membership_credits(items: &[String], ranks: &[usize], subset: &[usize]) -> Vec<ItemCredit> {
    (0..ranks.len())
        .map(|pos| ItemCredit {
            item: items[pos].clone(),
            position: pos,
            correct_rank: ranks[pos],
            score: subset.contains(&pos) as u32,
            max_score: 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> CorrectOrder {
        CorrectOrder::new(["alpha", "beta", "gamma", "delta"]).unwrap()
    }

    fn breakdown_fraction(credits: &[ItemCredit]) -> f64 {
        let earned: u32 = credits.iter().map(|c| c.score).sum();
        let available: u32 = credits.iter().map(|c| c.max_score).sum();
        earned as f64 / available as f64
    }

    #[test]
    fn breakdown_reproduces_the_aggregate_fraction() {
        let correct = order();
        let submissions = [
            ["alpha", "beta", "gamma", "delta"],
            ["delta", "gamma", "beta", "alpha"],
            ["beta", "alpha", "gamma", "delta"],
            ["delta", "alpha", "beta", "gamma"],
        ];
        for items in submissions {
            let submission = Submission::new(items);
            for strategy in GradingStrategy::ALL {
                let details = grade_details(&correct, &submission, strategy).unwrap();
                let rebuilt = breakdown_fraction(&details.item_credits);
                assert!(
                    (rebuilt - details.fraction).abs() < 1e-9,
                    "{strategy} on {items:?}: breakdown {rebuilt} vs fraction {}",
                    details.fraction
                );
            }
        }
    }

    #[test]
    fn absolute_position_credits_exact_slots_only() {
        let submission = Submission::new(["alpha", "gamma", "beta", "delta"]);
        let credits =
            item_credits(&order(), &submission, GradingStrategy::AbsolutePosition).unwrap();
        let scores: Vec<u32> = credits.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![1, 0, 0, 1]);
        assert!(credits.iter().all(|c| c.max_score == 1));
    }

    #[test]
    fn exclude_last_gives_the_final_item_no_check() {
        let submission = Submission::new(["alpha", "beta", "gamma", "delta"]);
        let credits = item_credits(
            &order(),
            &submission,
            GradingStrategy::RelativeNextExcludeLast,
        )
        .unwrap();
        // "delta" has correct rank N-1: nothing follows it.
        assert_eq!(credits[3].max_score, 0);
        assert_eq!(credits[3].score, 0);
        let available: u32 = credits.iter().map(|c| c.max_score).sum();
        assert_eq!(available, 3);
    }

    #[test]
    fn subset_credits_mark_membership() {
        // Ranks [1, 2, 3, 0]: the first three form the longest block.
        let submission = Submission::new(["beta", "gamma", "delta", "alpha"]);
        let credits = item_credits(
            &order(),
            &submission,
            GradingStrategy::LongestContiguousSubset,
        )
        .unwrap();
        let scores: Vec<u32> = credits.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![1, 1, 1, 0]);
    }

    #[test]
    fn correctly_placed_counts_exact_positions() {
        let correct = order();
        let submission = Submission::new(["alpha", "gamma", "beta", "delta"]);
        assert_eq!(correctly_placed(&correct, &submission).unwrap(), 2);

        let submission = Submission::new(["delta", "gamma", "beta", "alpha"]);
        assert_eq!(correctly_placed(&correct, &submission).unwrap(), 0);
    }

    #[test]
    fn details_for_single_item_order() {
        let correct = CorrectOrder::new(["only"]).unwrap();
        let submission = Submission::new(["only"]);
        for strategy in GradingStrategy::ALL {
            let details = grade_details(&correct, &submission, strategy).unwrap();
            assert_eq!(details.correctly_placed, 1);
            assert_eq!(details.item_credits.len(), 1);
            assert!((breakdown_fraction(&details.item_credits) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn summarise_joins_items() {
        let submission = Submission::new(["beta", "alpha", "gamma"]);
        assert_eq!(summarise(&submission), "beta; alpha; gamma");
    }

    #[test]
    fn details_serialize_for_host_persistence() {
        let details = grade_details(
            &order(),
            &Submission::new(["alpha", "beta", "gamma", "delta"]),
            GradingStrategy::AbsolutePosition,
        )
        .unwrap();
        let json = serde_json::to_string(&details).unwrap();
        let back: GradeDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(back, details);
    }
}
