//! SubmitAssessmentHandler - Command handler for storing a completed questionnaire.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::AnswerSheet;
use crate::domain::scoring::{ScoreAggregator, ScoreSet};
use crate::domain::session::AssessmentError;
use crate::ports::SessionStore;

/// Command to submit answers for a session.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub session_id: SessionId,
    pub answers: AnswerSheet,
}

/// Result of a submission.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub session_id: SessionId,
    pub scores: ScoreSet,
}

/// Handler that aggregates answers and stores the ScoreSet in the session.
///
/// This is the only writer of a session's scores.
pub struct SubmitAssessmentHandler {
    store: Arc<dyn SessionStore>,
}

impl SubmitAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, AssessmentError> {
        let mut context = self
            .store
            .find(cmd.session_id)
            .await?
            .ok_or(AssessmentError::SessionNotFound(cmd.session_id))?;

        let scores = ScoreAggregator::aggregate(&cmd.answers);
        debug!(session_id = %cmd.session_id, sums = ?scores.as_array(), "Assessment aggregated");

        context.record(scores);
        self.store.save(&context).await?;

        info!(session_id = %cmd.session_id, total = scores.total(), "Assessment stored");
        Ok(SubmitAssessmentResult {
            session_id: cmd.session_id,
            scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::foundation::{Dimension, Rating};
    use crate::domain::session::SessionContext;
    use crate::ports::SessionStoreError;
    use async_trait::async_trait;
    use std::time::Duration;

    struct FailingStore;

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn find(
            &self,
            session_id: SessionId,
        ) -> Result<Option<SessionContext>, SessionStoreError> {
            Ok(Some(SessionContext::new(session_id)))
        }

        async fn save(&self, _context: &SessionContext) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::Unavailable("disk full".to_string()))
        }

        async fn clear(&self, _session_id: SessionId) -> Result<(), SessionStoreError> {
            Ok(())
        }

        async fn evict_idle(&self, _idle_timeout: Duration) -> Result<usize, SessionStoreError> {
            Ok(0)
        }
    }

    async fn started(store: &InMemorySessionStore) -> SessionId {
        let ctx = SessionContext::new(SessionId::new());
        store.save(&ctx).await.unwrap();
        ctx.id()
    }

    #[tokio::test]
    async fn stores_aggregated_scores() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SubmitAssessmentHandler::new(store.clone());
        let session_id = started(&store).await;

        let result = handler
            .handle(SubmitAssessmentCommand {
                session_id,
                answers: AnswerSheet::uniform(Rating::StronglyAgree),
            })
            .await
            .unwrap();

        assert_eq!(result.scores.as_array(), [25, 25, 25, 25]);
        let ctx = store.find(session_id).await.unwrap().unwrap();
        assert_eq!(ctx.scores(), Some(&result.scores));
    }

    #[tokio::test]
    async fn resubmission_overwrites_scores() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SubmitAssessmentHandler::new(store.clone());
        let session_id = started(&store).await;

        handler
            .handle(SubmitAssessmentCommand {
                session_id,
                answers: AnswerSheet::new(),
            })
            .await
            .unwrap();

        let mut answers = AnswerSheet::new();
        answers.answer(Dimension::Spiritual, 0, Rating::StronglyAgree).unwrap();
        handler
            .handle(SubmitAssessmentCommand {
                session_id,
                answers,
            })
            .await
            .unwrap();

        let ctx = store.find(session_id).await.unwrap().unwrap();
        assert_eq!(ctx.scores().unwrap().get(Dimension::Spiritual), 17);
    }

    #[tokio::test]
    async fn submission_to_unstarted_session_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SubmitAssessmentHandler::new(store.clone());
        let session_id = SessionId::new();

        let err = handler
            .handle(SubmitAssessmentCommand {
                session_id,
                answers: AnswerSheet::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::SessionNotFound(session_id));
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = SubmitAssessmentHandler::new(Arc::new(FailingStore));

        let err = handler
            .handle(SubmitAssessmentCommand {
                session_id: SessionId::new(),
                answers: AnswerSheet::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::Storage(_)));
    }
}
