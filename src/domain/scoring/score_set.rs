//! ScoreSet and PercentageSet - per-dimension sums and their shares.

use serde::ser::{Serialize, Serializer};

use crate::domain::foundation::{Dimension, Percentage, Rating, ValidationError};
use crate::domain::questionnaire::QUESTIONS_PER_DIMENSION;

/// Smallest possible per-dimension sum.
pub const MIN_DIMENSION_SCORE: u32 = QUESTIONS_PER_DIMENSION as u32 * Rating::MIN as u32;

/// Largest possible per-dimension sum.
pub const MAX_DIMENSION_SCORE: u32 = QUESTIONS_PER_DIMENSION as u32 * Rating::MAX as u32;

/// Summed ratings per dimension for one completed assessment.
///
/// Every sum lies in `[MIN_DIMENSION_SCORE, MAX_DIMENSION_SCORE]`, so the
/// total is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSet {
    sums: [u32; Dimension::COUNT],
}

impl ScoreSet {
    /// Creates a ScoreSet from sums in canonical dimension order.
    pub fn try_from_sums(sums: [u32; Dimension::COUNT]) -> Result<Self, ValidationError> {
        for (dimension, sum) in Dimension::ALL.into_iter().zip(sums) {
            if !(MIN_DIMENSION_SCORE..=MAX_DIMENSION_SCORE).contains(&sum) {
                return Err(ValidationError::out_of_range(
                    format!("{} score", dimension),
                    MIN_DIMENSION_SCORE as i32,
                    MAX_DIMENSION_SCORE as i32,
                    sum as i32,
                ));
            }
        }
        Ok(Self { sums })
    }

    /// Built by the aggregator, which guarantees the range invariant.
    pub(crate) fn from_valid_sums(sums: [u32; Dimension::COUNT]) -> Self {
        Self { sums }
    }

    /// Sum for one dimension.
    pub fn get(&self, dimension: Dimension) -> u32 {
        self.sums[dimension.index()]
    }

    /// Sum across all dimensions.
    pub fn total(&self) -> u32 {
        self.sums.iter().sum()
    }

    /// Sums in canonical dimension order.
    pub fn as_array(&self) -> [u32; Dimension::COUNT] {
        self.sums
    }

    /// Iterates `(Dimension, sum)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u32)> + '_ {
        Dimension::ALL.into_iter().zip(self.sums.iter().copied())
    }

    /// Each dimension's share of the total, as a percentage.
    pub fn percentages(&self) -> PercentageSet {
        let total = self.total();
        PercentageSet {
            shares: self.sums.map(|sum| Percentage::share_of(sum, total)),
        }
    }
}

impl Serialize for ScoreSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Per-dimension share of the total score; the shares sum to 100.
///
/// Derived from a ScoreSet and never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageSet {
    shares: [Percentage; Dimension::COUNT],
}

impl PercentageSet {
    /// Share for one dimension.
    pub fn get(&self, dimension: Dimension) -> Percentage {
        self.shares[dimension.index()]
    }

    /// Iterates `(Dimension, Percentage)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Percentage)> + '_ {
        Dimension::ALL.into_iter().zip(self.shares.iter().copied())
    }

    /// Sum of all shares (100 up to floating-point rounding).
    pub fn sum(&self) -> f64 {
        self.shares.iter().map(Percentage::value).sum()
    }
}

impl Serialize for PercentageSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
