//! Route configuration for assessment endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{
    end_session, get_insights, get_introduction, get_questionnaire, get_results, start_session,
    submit_assessment, AssessmentAppState,
};

/// Creates the assessment router with all endpoints.
///
/// Routes:
/// - `GET /api/introduction` - Title, welcome text and dimension descriptions
/// - `GET /api/questionnaire` - Question catalog and answer scale
/// - `POST /api/sessions` - Start a session
/// - `POST /api/sessions/:session_id/assessment` - Submit answers
/// - `GET /api/sessions/:session_id/results` - Percentages and feedback
/// - `GET /api/sessions/:session_id/insights` - Predicted category
/// - `DELETE /api/sessions/:session_id` - Discard session state
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/api/introduction", get(get_introduction))
        .route("/api/questionnaire", get(get_questionnaire))
        .route("/api/sessions", post(start_session))
        .route("/api/sessions/:session_id", delete(end_session))
        .route("/api/sessions/:session_id/assessment", post(submit_assessment))
        .route("/api/sessions/:session_id/results", get(get_results))
        .route("/api/sessions/:session_id/insights", get(get_insights))
}
