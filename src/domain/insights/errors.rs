//! Insights-specific error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors raised while synthesizing data or fitting a classifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsightsError {
    #[error("Cannot fit a classifier on an empty training partition")]
    EmptyTrainingSet,

    #[error("Test fraction must lie strictly between 0 and 1, got {0}")]
    InvalidSplit(f64),

    /// The fit ran on a blocking worker that panicked or was cancelled.
    #[error("Classifier fit failed: {0}")]
    FitFailed(String),
}

impl InsightsError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ClassifierFitFailed
    }
}
