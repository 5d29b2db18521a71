//! GetAdvancedInsightsHandler - Query handler for the category prediction.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::SessionId;
use crate::domain::insights::{CategoryPredictor, Insight, InsightsError};
use crate::domain::session::{AssessmentError, SectionOutcome};
use crate::ports::SessionStore;

/// Query for a session's predicted category.
#[derive(Debug, Clone)]
pub struct GetAdvancedInsightsQuery {
    pub session_id: SessionId,
}

/// Handler that trains a throwaway classifier and labels the stored scores.
///
/// The fit is CPU-bound and runs on tokio's blocking pool.
pub struct GetAdvancedInsightsHandler {
    store: Arc<dyn SessionStore>,
    predictor: CategoryPredictor,
}

impl GetAdvancedInsightsHandler {
    pub fn new(store: Arc<dyn SessionStore>, predictor: CategoryPredictor) -> Self {
        Self { store, predictor }
    }

    pub async fn handle(
        &self,
        query: GetAdvancedInsightsQuery,
    ) -> Result<SectionOutcome<Insight>, AssessmentError> {
        let context = self
            .store
            .find(query.session_id)
            .await?
            .ok_or(AssessmentError::SessionNotFound(query.session_id))?;

        let predictor = self.predictor.clone();
        let outcome = tokio::task::spawn_blocking(move || predictor.predict_for(&context))
            .await
            .unwrap_or_else(|join_error| Err(InsightsError::FitFailed(join_error.to_string())))
            .map_err(|e| {
                warn!(session_id = %query.session_id, error = %e, "Category prediction failed");
                AssessmentError::from(e)
            })?;

        match &outcome {
            SectionOutcome::NotCompleted => {
                debug!(session_id = %query.session_id, "Insights requested before assessment");
            }
            SectionOutcome::Ready(insight) => {
                info!(
                    session_id = %query.session_id,
                    category = %insight.category,
                    algorithm = insight.algorithm,
                    training_samples = insight.training_samples,
                    reproducible = insight.reproducible,
                    "Category predicted"
                );
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::classifier::RandomForestClassifier;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::insights::{Category, PredictorSettings};
    use crate::domain::scoring::ScoreSet;
    use crate::domain::session::SessionContext;

    fn predictor(settings: PredictorSettings) -> CategoryPredictor {
        CategoryPredictor::new(Arc::new(RandomForestClassifier::new(20, 42)), settings)
    }

    fn seeded() -> PredictorSettings {
        PredictorSettings {
            data_seed: Some(9),
            ..PredictorSettings::default()
        }
    }

    #[tokio::test]
    async fn reports_not_completed_without_scores() {
        let store = Arc::new(InMemorySessionStore::new());
        let ctx = SessionContext::new(SessionId::new());
        store.save(&ctx).await.unwrap();
        let handler = GetAdvancedInsightsHandler::new(store, predictor(seeded()));

        let outcome = handler
            .handle(GetAdvancedInsightsQuery {
                session_id: ctx.id(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, SectionOutcome::NotCompleted);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler =
            GetAdvancedInsightsHandler::new(Arc::new(InMemorySessionStore::new()), predictor(seeded()));
        let session_id = SessionId::new();

        let err = handler
            .handle(GetAdvancedInsightsQuery { session_id })
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::SessionNotFound(session_id));
    }

    #[tokio::test]
    async fn predicts_for_stored_scores() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut ctx = SessionContext::new(SessionId::new());
        ctx.record(ScoreSet::try_from_sums([20, 15, 10, 25]).unwrap());
        store.save(&ctx).await.unwrap();

        let handler = GetAdvancedInsightsHandler::new(store, predictor(seeded()));
        let query = GetAdvancedInsightsQuery {
            session_id: ctx.id(),
        };

        let first = handler.handle(query.clone()).await.unwrap();
        let second = handler.handle(query).await.unwrap();

        let SectionOutcome::Ready(insight) = first.clone() else {
            panic!("expected a prediction");
        };
        assert!(Category::ALL.contains(&insight.category));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn fit_failure_is_reported_for_this_request_only() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut ctx = SessionContext::new(SessionId::new());
        ctx.record(ScoreSet::try_from_sums([20, 15, 10, 25]).unwrap());
        store.save(&ctx).await.unwrap();

        let handler = GetAdvancedInsightsHandler::new(
            store.clone(),
            predictor(PredictorSettings {
                test_fraction: 0.0,
                ..seeded()
            }),
        );

        let err = handler
            .handle(GetAdvancedInsightsQuery {
                session_id: ctx.id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::Insights(InsightsError::InvalidSplit(0.0)));
        assert!(store.find(ctx.id()).await.unwrap().unwrap().is_completed());
    }
}
