//! Errors raised by the assessment section handlers.

use crate::domain::foundation::{ErrorCode, SessionId, ValidationError};
use crate::domain::insights::InsightsError;
use crate::ports::SessionStoreError;

/// Section-handler errors.
///
/// A missing assessment is not an error; it is reported as
/// `SectionOutcome::NotCompleted`.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentError {
    /// Submitted answers were malformed.
    Validation(ValidationError),
    /// The session was never started, was ended, or expired.
    SessionNotFound(SessionId),
    /// The insights classifier could not be fitted.
    Insights(InsightsError),
    /// The session store failed.
    Storage(String),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            AssessmentError::Validation(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            AssessmentError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            AssessmentError::Insights(e) => e.code(),
            AssessmentError::Storage(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AssessmentError::Validation(e) => e.to_string(),
            AssessmentError::SessionNotFound(id) => format!("Session not found: {}", id),
            AssessmentError::Insights(e) => e.to_string(),
            AssessmentError::Storage(msg) => format!("Session storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::Validation(err)
    }
}

impl From<InsightsError> for AssessmentError {
    fn from(err: InsightsError) -> Self {
        AssessmentError::Insights(err)
    }
}

impl From<SessionStoreError> for AssessmentError {
    fn from(err: SessionStoreError) -> Self {
        AssessmentError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_error_kind() {
        let err: AssessmentError = ValidationError::out_of_range("rating", 1, 5, 0).into();
        assert_eq!(err.code(), ErrorCode::OutOfRange);

        let id = SessionId::new();
        let err = AssessmentError::SessionNotFound(id);
        assert_eq!(err.code(), ErrorCode::SessionNotFound);
        assert_eq!(err.to_string(), format!("Session not found: {}", id));

        let err: AssessmentError = InsightsError::EmptyTrainingSet.into();
        assert_eq!(err.code(), ErrorCode::ClassifierFitFailed);

        let err: AssessmentError = SessionStoreError::Unavailable("down".into()).into();
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert_eq!(
            err.to_string(),
            "Session storage error: Session store unavailable: down"
        );
    }
}
