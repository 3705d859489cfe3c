//! Core data model types for ordermark.
//!
//! These are the fundamental types the grading engine operates on: the
//! author-defined correct order, a learner's submission, and the closed
//! set of grading strategies.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;

/// The author-defined canonical ordering of items.
///
/// Immutable once constructed, and constructed once per question
/// instance. Construction derives the identifier → correct-rank map,
/// so rank lookups are O(1) thereafter.
///
/// Item identifiers are opaque strings: the engine compares them for
/// equality and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CorrectOrder {
    items: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl CorrectOrder {
    /// Build a correct order from its items, first to last.
    ///
    /// Fails with [`GradeError::EmptyOrder`] for an empty list and
    /// [`GradeError::DuplicateItem`] if any identifier repeats.
    pub fn new<I, S>(items: I) -> Result<Self, GradeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(GradeError::EmptyOrder);
        }
        let mut ranks = HashMap::with_capacity(items.len());
        for (rank, item) in items.iter().enumerate() {
            if ranks.insert(item.clone(), rank).is_some() {
                return Err(GradeError::DuplicateItem { item: item.clone() });
            }
        }
        Ok(Self { items, ranks })
    }

    /// Number of items in the order.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty orders.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in correct order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Zero-based correct rank of an identifier, if it belongs to this
    /// order.
    pub fn rank_of(&self, item: &str) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    /// Whether an identifier belongs to this order.
    pub fn contains(&self, item: &str) -> bool {
        self.ranks.contains_key(item)
    }
}

impl TryFrom<Vec<String>> for CorrectOrder {
    type Error = GradeError;

    fn try_from(items: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<CorrectOrder> for Vec<String> {
    fn from(order: CorrectOrder) -> Self {
        order.items
    }
}

/// A learner-provided ordering to be graded.
///
/// Constructed fresh per attempt and carrying no validity guarantees of
/// its own; [`crate::validate::validate`] checks it against a correct
/// order before any scoring happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    items: Vec<String>,
}

impl Submission {
    /// Wrap an ordered list of item identifiers.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of items submitted.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the submission is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in submitted order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl<S: Into<String>> FromIterator<S> for Submission {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// The closed set of partial-credit grading strategies.
///
/// Adding a strategy is a code change, not configuration; within the
/// type system dispatch is total, and an unknown tag can only arise at
/// the string boundary ([`FromStr`], serde).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingStrategy {
    /// Full credit only for an exactly correct submission.
    AllOrNothing,
    /// Fraction of items sitting in their exact correct slot.
    AbsolutePosition,
    /// Fraction of correct consecutive pairs reproduced adjacently;
    /// the last item's resting place is not checked.
    RelativeNextExcludeLast,
    /// As above, plus one check that the final correct item is also
    /// last in the submission.
    RelativeNextIncludeLast,
    /// Immediate-neighbor agreement on both sides of every item.
    RelativeOnePreviousAndNext,
    /// Fraction of concordant item pairs.
    RelativeAllPreviousAndNext,
    /// Longest strictly increasing subsequence of the rank sequence.
    LongestOrderedSubset,
    /// Longest contiguous block matching a slice of the correct order.
    LongestContiguousSubset,
    /// Linearly decaying credit for each item's displacement.
    RelativeToCorrect,
}

impl GradingStrategy {
    /// Every strategy, in catalogue order.
    pub const ALL: [GradingStrategy; 9] = [
        GradingStrategy::AllOrNothing,
        GradingStrategy::AbsolutePosition,
        GradingStrategy::RelativeNextExcludeLast,
        GradingStrategy::RelativeNextIncludeLast,
        GradingStrategy::RelativeOnePreviousAndNext,
        GradingStrategy::RelativeAllPreviousAndNext,
        GradingStrategy::LongestOrderedSubset,
        GradingStrategy::LongestContiguousSubset,
        GradingStrategy::RelativeToCorrect,
    ];

    /// The stable string tag, as accepted by [`FromStr`] and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradingStrategy::AllOrNothing => "all_or_nothing",
            GradingStrategy::AbsolutePosition => "absolute_position",
            GradingStrategy::RelativeNextExcludeLast => "relative_next_exclude_last",
            GradingStrategy::RelativeNextIncludeLast => "relative_next_include_last",
            GradingStrategy::RelativeOnePreviousAndNext => "relative_one_previous_and_next",
            GradingStrategy::RelativeAllPreviousAndNext => "relative_all_previous_and_next",
            GradingStrategy::LongestOrderedSubset => "longest_ordered_subset",
            GradingStrategy::LongestContiguousSubset => "longest_contiguous_subset",
            GradingStrategy::RelativeToCorrect => "relative_to_correct",
        }
    }
}

impl fmt::Display for GradingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradingStrategy {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradingStrategy::ALL
            .iter()
            .find(|strategy| strategy.as_str() == s)
            .copied()
            .ok_or_else(|| GradeError::UnknownStrategy { name: s.to_string() })
    }
}
