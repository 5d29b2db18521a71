//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, InsightsResponse, IntroductionResponse, QuestionnaireResponse, ResultsResponse,
    ScoresResponse, SectionResponse, SubmitAssessmentRequest,
};
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_router;
