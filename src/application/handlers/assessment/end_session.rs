//! EndSessionHandler - Command handler for discarding a session's state.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::session::AssessmentError;
use crate::ports::SessionStore;

/// Command to end a session.
#[derive(Debug, Clone)]
pub struct EndSessionCommand {
    pub session_id: SessionId,
}

/// Handler that clears everything stored for a session.
pub struct EndSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl EndSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndSessionCommand) -> Result<(), AssessmentError> {
        self.store.clear(cmd.session_id).await?;
        info!(session_id = %cmd.session_id, "Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::scoring::ScoreSet;
    use crate::domain::session::SessionContext;

    #[tokio::test]
    async fn ending_a_session_discards_scores() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut ctx = SessionContext::new(SessionId::new());
        ctx.record(ScoreSet::try_from_sums([10, 10, 10, 10]).unwrap());
        store.save(&ctx).await.unwrap();

        EndSessionHandler::new(store.clone())
            .handle(EndSessionCommand {
                session_id: ctx.id(),
            })
            .await
            .unwrap();

        assert!(store.find(ctx.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ending_an_unknown_session_is_a_no_op() {
        let handler = EndSessionHandler::new(Arc::new(InMemorySessionStore::new()));
        assert!(handler
            .handle(EndSessionCommand {
                session_id: SessionId::new(),
            })
            .await
            .is_ok());
    }
}
