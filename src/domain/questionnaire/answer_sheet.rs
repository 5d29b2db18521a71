//! AnswerSheet - one rating per question, never partially missing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Dimension, Rating, ValidationError};

use super::catalog::QUESTIONS_PER_DIMENSION;

/// Ratings for one dimension, in question order.
pub type DimensionAnswers = [Rating; QUESTIONS_PER_DIMENSION];

/// Completed set of answers for the whole questionnaire.
///
/// Every slot starts at `Rating::default()` (mid-scale 3) and is overwritten
/// when the user answers, so a sheet always covers every question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: [DimensionAnswers; Dimension::COUNT],
}

impl AnswerSheet {
    /// Creates a sheet with every answer at the default rating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sheet with every answer set to the same rating.
    pub fn uniform(rating: Rating) -> Self {
        Self {
            answers: [[rating; QUESTIONS_PER_DIMENSION]; Dimension::COUNT],
        }
    }

    /// Records an answer, overwriting any previous one.
    pub fn answer(
        &mut self,
        dimension: Dimension,
        question: usize,
        rating: Rating,
    ) -> Result<(), ValidationError> {
        let slot = self.answers[dimension.index()]
            .get_mut(question)
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "question",
                    0,
                    QUESTIONS_PER_DIMENSION as i32 - 1,
                    question as i32,
                )
            })?;
        *slot = rating;
        Ok(())
    }

    /// Replaces all answers for one dimension.
    pub fn set_dimension(&mut self, dimension: Dimension, answers: DimensionAnswers) {
        self.answers[dimension.index()] = answers;
    }

    /// Answers for one dimension.
    pub fn dimension(&self, dimension: Dimension) -> &DimensionAnswers {
        &self.answers[dimension.index()]
    }

    /// Iterates `(Dimension, Rating)` pairs in catalog order.
    pub fn pairs(&self) -> impl Iterator<Item = (Dimension, Rating)> + '_ {
        Dimension::ALL
            .into_iter()
            .flat_map(move |d| self.dimension(d).iter().map(move |r| (d, *r)))
    }
}
