//! In-Memory Session Store Adapter
//!
//! Keeps one `SessionContext` per session in process memory. Contexts vanish
//! when the session is cleared, when an idle sweep evicts them, or when the
//! process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionContext;
use crate::ports::{SessionStore, SessionStoreError};

#[derive(Debug, Clone)]
struct Entry {
    context: SessionContext,
    last_access: Instant,
}

impl Entry {
    fn new(context: SessionContext) -> Self {
        Self {
            context,
            last_access: Instant::now(),
        }
    }
}

/// In-memory storage for session contexts
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Entry>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of sessions holding state
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn find(&self, session_id: SessionId) -> Result<Option<SessionContext>, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.get_mut(&session_id).map(|entry| {
            entry.last_access = Instant::now();
            entry.context.clone()
        }))
    }

    async fn save(&self, context: &SessionContext) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(context.id(), Entry::new(context.clone()));
        Ok(())
    }

    async fn clear(&self, session_id: SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn evict_idle(&self, idle_timeout: Duration) -> Result<usize, SessionStoreError> {
        let Some(cutoff) = Instant::now().checked_sub(idle_timeout) else {
            return Ok(0);
        };

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_access > cutoff);
        Ok(before - sessions.len())
    }
}
