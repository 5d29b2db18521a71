//! Score Aggregator - sums per-question ratings into a ScoreSet.

use crate::domain::foundation::{Dimension, Rating, ValidationError};
use crate::domain::questionnaire::{AnswerSheet, QUESTIONS_PER_DIMENSION};

use super::ScoreSet;

/// Stateless aggregator over questionnaire answers.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Sums a complete answer sheet. Infallible: the sheet covers every question.
    pub fn aggregate(sheet: &AnswerSheet) -> ScoreSet {
        let sums = Dimension::ALL.map(|d| {
            sheet
                .dimension(d)
                .iter()
                .map(|r| u32::from(r.value()))
                .sum::<u32>()
        });
        ScoreSet::from_valid_sums(sums)
    }

    /// Sums an ordered sequence of `(Dimension, Rating)` pairs.
    ///
    /// Each dimension must receive exactly `QUESTIONS_PER_DIMENSION` ratings.
    pub fn aggregate_pairs<I>(pairs: I) -> Result<ScoreSet, ValidationError>
    where
        I: IntoIterator<Item = (Dimension, Rating)>,
    {
        let mut sums = [0u32; Dimension::COUNT];
        let mut counts = [0usize; Dimension::COUNT];

        for (dimension, rating) in pairs {
            sums[dimension.index()] += u32::from(rating.value());
            counts[dimension.index()] += 1;
        }

        for (dimension, count) in Dimension::ALL.into_iter().zip(counts) {
            if count != QUESTIONS_PER_DIMENSION {
                return Err(ValidationError::out_of_range(
                    format!("{} responses", dimension),
                    QUESTIONS_PER_DIMENSION as i32,
                    QUESTIONS_PER_DIMENSION as i32,
                    count as i32,
                ));
            }
        }

        Ok(ScoreSet::from_valid_sums(sums))
    }
}
