//! Assessment handlers - one per questionnaire section operation.

mod end_session;
mod get_advanced_insights;
mod get_results;
mod start_session;
mod submit_assessment;

pub use end_session::{EndSessionCommand, EndSessionHandler};
pub use get_advanced_insights::{GetAdvancedInsightsHandler, GetAdvancedInsightsQuery};
pub use get_results::{GetResultsHandler, GetResultsQuery, ResultsView};
pub use start_session::{StartSessionHandler, StartSessionResult};
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
