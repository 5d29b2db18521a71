//! GetResultsHandler - Query handler for the results section.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::scoring::ResultsReport;
use crate::domain::session::{AssessmentError, SectionOutcome};
use crate::ports::SessionStore;

/// Query for a session's results.
#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub session_id: SessionId,
}

/// Results for the most recent submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub report: ResultsReport,
    pub submitted_at: Timestamp,
}

/// Handler that renders percentages and feedback for the stored ScoreSet.
pub struct GetResultsHandler {
    store: Arc<dyn SessionStore>,
}

impl GetResultsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetResultsQuery,
    ) -> Result<SectionOutcome<ResultsView>, AssessmentError> {
        let context = self
            .store
            .find(query.session_id)
            .await?
            .ok_or(AssessmentError::SessionNotFound(query.session_id))?;

        let Some(recorded) = context.recorded() else {
            debug!(session_id = %query.session_id, "Results requested before assessment");
            return Ok(SectionOutcome::NotCompleted);
        };

        Ok(SectionOutcome::Ready(ResultsView {
            report: ResultsReport::from_scores(recorded.scores),
            submitted_at: recorded.submitted_at,
        }))
    }
}
