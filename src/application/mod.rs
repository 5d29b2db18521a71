//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write the session store; query handlers only read it.

pub mod handlers;

pub use handlers::{
    EndSessionCommand, EndSessionHandler, GetAdvancedInsightsHandler, GetAdvancedInsightsQuery,
    GetResultsHandler, GetResultsQuery, ResultsView, StartSessionHandler, StartSessionResult,
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
