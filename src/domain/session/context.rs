//! SessionContext - the state one browser session carries between sections.

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::scoring::ScoreSet;

/// Scores recorded by the most recent assessment submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedScores {
    pub scores: ScoreSet,
    pub submitted_at: Timestamp,
}

/// Per-session state handed to each section handler.
///
/// Holds at most one ScoreSet. Only the assessment step writes it; results and
/// insights only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    id: SessionId,
    recorded: Option<RecordedScores>,
}

impl SessionContext {
    /// Creates an empty context for a session.
    pub fn new(id: SessionId) -> Self {
        Self { id, recorded: None }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Most recent ScoreSet, if the assessment was completed.
    pub fn scores(&self) -> Option<&ScoreSet> {
        self.recorded.as_ref().map(|r| &r.scores)
    }

    /// Most recent ScoreSet together with its submission time.
    pub fn recorded(&self) -> Option<&RecordedScores> {
        self.recorded.as_ref()
    }

    /// Stores a ScoreSet, replacing any previous submission.
    pub fn record(&mut self, scores: ScoreSet) {
        self.recorded = Some(RecordedScores {
            scores,
            submitted_at: Timestamp::now(),
        });
    }

    pub fn is_completed(&self) -> bool {
        self.recorded.is_some()
    }
}

/// Result of rendering a section that needs a completed assessment.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutcome<T> {
    /// No ScoreSet exists for this session yet.
    NotCompleted,
    Ready(T),
}

impl<T> SectionOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SectionOutcome<U> {
        match self {
            SectionOutcome::NotCompleted => SectionOutcome::NotCompleted,
            SectionOutcome::Ready(value) => SectionOutcome::Ready(f(value)),
        }
    }
}
