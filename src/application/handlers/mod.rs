//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    EndSessionCommand, EndSessionHandler, GetAdvancedInsightsHandler, GetAdvancedInsightsQuery,
    GetResultsHandler, GetResultsQuery, ResultsView, StartSessionHandler, StartSessionResult,
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
