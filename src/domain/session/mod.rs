//! Session module - explicit per-session state passed to section handlers.

mod context;
mod errors;

pub use context::{RecordedScores, SectionOutcome, SessionContext};
pub use errors::AssessmentError;
