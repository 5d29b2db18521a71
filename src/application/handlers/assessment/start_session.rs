//! StartSessionHandler - Command handler for opening a new browser session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::session::{AssessmentError, SessionContext};
use crate::ports::SessionStore;

/// Result of starting a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
}

/// Handler that mints a session id with an empty context.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<StartSessionResult, AssessmentError> {
        let context = SessionContext::new(SessionId::new());
        self.store.save(&context).await?;

        info!(session_id = %context.id(), "Session started");
        Ok(StartSessionResult {
            session_id: context.id(),
        })
    }
}
