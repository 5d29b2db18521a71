//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::error;

use crate::application::{
    EndSessionCommand, EndSessionHandler, GetAdvancedInsightsHandler, GetAdvancedInsightsQuery,
    GetResultsHandler, GetResultsQuery, StartSessionHandler, SubmitAssessmentCommand,
    SubmitAssessmentHandler,
};
use crate::domain::foundation::{ErrorCode, SessionId, ValidationError};
use crate::domain::insights::CategoryPredictor;
use crate::domain::session::AssessmentError;
use crate::ports::SessionStore;

use super::dto::{
    ErrorResponse, InsightsResponse, IntroductionResponse, QuestionnaireResponse,
    ResultsResponse, ScoresResponse, SectionResponse, SessionCommandResponse,
    SubmitAssessmentRequest, INSIGHTS_NOT_COMPLETED, RESULTS_NOT_COMPLETED,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Assessment API error that implements IntoResponse.
#[derive(Debug)]
pub enum AssessmentApiError {
    /// Path or body could not be read at all.
    BadRequest(String),
    Assessment(AssessmentError),
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::OutOfRange | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ClassifierFitFailed | ErrorCode::StorageError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AssessmentApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AssessmentApiError::Assessment(e) => {
                let status = status_for(e.code());
                if status.is_server_error() {
                    error!(code = %e.code(), error = %e, "Assessment request failed");
                }
                (status, ErrorResponse::from(&e))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<AssessmentError> for AssessmentApiError {
    fn from(error: AssessmentError) -> Self {
        AssessmentApiError::Assessment(error)
    }
}

impl From<ValidationError> for AssessmentApiError {
    fn from(error: ValidationError) -> Self {
        AssessmentApiError::Assessment(AssessmentError::Validation(error))
    }
}

impl From<JsonRejection> for AssessmentApiError {
    fn from(rejection: JsonRejection) -> Self {
        AssessmentApiError::BadRequest(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing assessment dependencies.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub session_store: Arc<dyn SessionStore>,
    pub predictor: CategoryPredictor,
}

impl AssessmentAppState {
    pub fn new(session_store: Arc<dyn SessionStore>, predictor: CategoryPredictor) -> Self {
        Self {
            session_store,
            predictor,
        }
    }

    pub fn start_session_handler(&self) -> StartSessionHandler {
        StartSessionHandler::new(self.session_store.clone())
    }

    pub fn submit_assessment_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(self.session_store.clone())
    }

    pub fn get_results_handler(&self) -> GetResultsHandler {
        GetResultsHandler::new(self.session_store.clone())
    }

    pub fn get_advanced_insights_handler(&self) -> GetAdvancedInsightsHandler {
        GetAdvancedInsightsHandler::new(self.session_store.clone(), self.predictor.clone())
    }

    pub fn end_session_handler(&self) -> EndSessionHandler {
        EndSessionHandler::new(self.session_store.clone())
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, AssessmentApiError> {
    raw.parse()
        .map_err(|_| AssessmentApiError::BadRequest("Invalid session ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/introduction
pub async fn get_introduction() -> Json<IntroductionResponse> {
    Json(IntroductionResponse::build())
}

/// GET /api/questionnaire
pub async fn get_questionnaire() -> Json<QuestionnaireResponse> {
    Json(QuestionnaireResponse::build())
}

/// POST /api/sessions
pub async fn start_session(
    State(state): State<AssessmentAppState>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let result = state.start_session_handler().handle().await?;

    let response = SessionCommandResponse {
        session_id: result.session_id.to_string(),
        message: "Session started".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/sessions/:session_id/assessment
///
/// Aggregates the submitted answers and stores them for the session,
/// replacing any earlier submission. The session must have been started.
pub async fn submit_assessment(
    State(state): State<AssessmentAppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Result<Json<ScoresResponse>, AssessmentApiError> {
    let session_id = parse_session_id(&session_id)?;
    let Json(request) = payload?;
    let answers = request.into_answer_sheet()?;

    let result = state
        .submit_assessment_handler()
        .handle(SubmitAssessmentCommand {
            session_id,
            answers,
        })
        .await?;

    Ok(Json(ScoresResponse::new(result.session_id, result.scores)))
}

/// GET /api/sessions/:session_id/results
pub async fn get_results(
    State(state): State<AssessmentAppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SectionResponse<ResultsResponse>>, AssessmentApiError> {
    let session_id = parse_session_id(&session_id)?;

    let outcome = state
        .get_results_handler()
        .handle(GetResultsQuery { session_id })
        .await?;

    Ok(Json(SectionResponse::from_outcome(outcome, RESULTS_NOT_COMPLETED)))
}

/// GET /api/sessions/:session_id/insights
///
/// Trains a fresh classifier on every call.
pub async fn get_insights(
    State(state): State<AssessmentAppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SectionResponse<InsightsResponse>>, AssessmentApiError> {
    let session_id = parse_session_id(&session_id)?;

    let outcome = state
        .get_advanced_insights_handler()
        .handle(GetAdvancedInsightsQuery { session_id })
        .await?;

    Ok(Json(SectionResponse::from_outcome(outcome, INSIGHTS_NOT_COMPLETED)))
}

/// DELETE /api/sessions/:session_id
pub async fn end_session(
    State(state): State<AssessmentAppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AssessmentApiError> {
    let session_id = parse_session_id(&session_id)?;

    state
        .end_session_handler()
        .handle(EndSessionCommand { session_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
