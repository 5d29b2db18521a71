//! Session Store Port - Interface for session-scoped assessment state.
//!
//! Holds one `SessionContext` per browser session. Nothing is shared between
//! sessions and nothing outlives the session: a context is dropped when the
//! client ends the session or when it sits idle past the configured timeout.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionContext;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for loading and saving session contexts
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Find the context for a session, refreshing its idle timer
    ///
    /// Returns `None` for sessions that were never started, were ended, or
    /// expired.
    async fn find(&self, session_id: SessionId) -> Result<Option<SessionContext>, SessionStoreError>;

    /// Save a context, replacing whatever the session held before
    async fn save(&self, context: &SessionContext) -> Result<(), SessionStoreError>;

    /// Drop all state for a session (end of session)
    async fn clear(&self, session_id: SessionId) -> Result<(), SessionStoreError>;

    /// Drop every session untouched for at least `idle_timeout`
    ///
    /// Returns the number of sessions removed.
    async fn evict_idle(&self, idle_timeout: Duration) -> Result<usize, SessionStoreError>;
}
