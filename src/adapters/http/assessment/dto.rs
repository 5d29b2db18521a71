//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::application::ResultsView;
use crate::domain::foundation::{Dimension, Rating, SessionId, ValidationError};
use crate::domain::insights::Insight;
use crate::domain::questionnaire::{questions_for, AnswerSheet, QUESTIONS_PER_DIMENSION};
use crate::domain::scoring::{Band, BarChart, Feedback, PercentageSet, ScoreSet};
use crate::domain::session::{AssessmentError, SectionOutcome};

pub const APP_TITLE: &str = "Religiousness Assessment Tool with Advanced Insights";

pub const WELCOME_TEXT: &str = "Welcome to the Religiousness Assessment Tool! This app evaluates \
your religiousness across four dimensions. Answer the questions, and we'll provide insights and \
advanced feedback based on your responses.";

pub const ABOUT_TEXT: &str = "This tool combines introspection and technology to provide insights \
into your religiousness profile. Answer all the questions to receive personalized and data-driven \
feedback.";

pub const INSIGHTS_INTRO: &str = "Using machine learning, we analyze patterns to give you deeper \
insights into your religiousness profile.";

pub const RESULTS_NOT_COMPLETED: &str = "Please complete the assessment first.";

pub const INSIGHTS_NOT_COMPLETED: &str = "Complete the assessment first to get advanced insights.";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request carrying the questionnaire answers.
///
/// Keys are dimension names (case-insensitive) and may name each dimension
/// once. A dimension left out keeps every one of its answers at the mid-scale
/// default. Values are read as wide integers so that out-of-scale ratings
/// reach validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitAssessmentRequest {
    #[serde(default)]
    pub responses: HashMap<String, Vec<i64>>,
}

impl SubmitAssessmentRequest {
    /// Validates the raw answers into a complete sheet.
    pub fn into_answer_sheet(self) -> Result<AnswerSheet, ValidationError> {
        let mut sheet = AnswerSheet::new();
        let mut seen = [false; Dimension::COUNT];

        for (name, values) in self.responses {
            let dimension: Dimension = name.parse()?;
            if std::mem::replace(&mut seen[dimension.index()], true) {
                return Err(ValidationError::invalid_format(
                    "dimension",
                    format!("duplicate entry for {}", dimension),
                ));
            }
            if values.len() != QUESTIONS_PER_DIMENSION {
                return Err(ValidationError::out_of_range(
                    format!("{} responses", dimension),
                    QUESTIONS_PER_DIMENSION as i32,
                    QUESTIONS_PER_DIMENSION as i32,
                    values.len() as i32,
                ));
            }

            let mut answers = [Rating::default(); QUESTIONS_PER_DIMENSION];
            for (slot, value) in answers.iter_mut().zip(values) {
                *slot = rating_from(value)?;
            }
            sheet.set_dimension(dimension, answers);
        }

        Ok(sheet)
    }
}

fn rating_from(value: i64) -> Result<Rating, ValidationError> {
    let byte = u8::try_from(value).map_err(|_| {
        ValidationError::out_of_range(
            "rating",
            i32::from(Rating::MIN),
            i32::from(Rating::MAX),
            value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        )
    })?;
    Rating::try_from_u8(byte)
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One dimension as listed on the introduction page.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionSummary {
    pub name: Dimension,
    pub description: &'static str,
}

/// Introduction section.
#[derive(Debug, Clone, Serialize)]
pub struct IntroductionResponse {
    pub title: &'static str,
    pub welcome: &'static str,
    pub about: &'static str,
    pub dimensions: Vec<DimensionSummary>,
}

impl IntroductionResponse {
    pub fn build() -> Self {
        Self {
            title: APP_TITLE,
            welcome: WELCOME_TEXT,
            about: ABOUT_TEXT,
            dimensions: Dimension::ALL
                .into_iter()
                .map(|name| DimensionSummary {
                    name,
                    description: name.description(),
                })
                .collect(),
        }
    }
}

/// Answer scale advertised to clients.
#[derive(Debug, Clone, Serialize)]
pub struct RatingScale {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

/// Prompts for one dimension, in question order.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionQuestions {
    pub dimension: Dimension,
    pub questions: Vec<&'static str>,
}

/// Questionnaire section.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub scale: RatingScale,
    pub dimensions: Vec<DimensionQuestions>,
}

impl QuestionnaireResponse {
    pub fn build() -> Self {
        Self {
            scale: RatingScale {
                min: Rating::MIN,
                max: Rating::MAX,
                default: Rating::default().value(),
            },
            dimensions: Dimension::ALL
                .into_iter()
                .map(|dimension| DimensionQuestions {
                    dimension,
                    questions: questions_for(dimension).iter().map(|q| q.prompt).collect(),
                })
                .collect(),
        }
    }
}

/// Response for a newly started session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionCommandResponse {
    pub session_id: String,
    pub message: String,
}

/// Scores stored by an assessment submission.
#[derive(Debug, Clone, Serialize)]
pub struct ScoresResponse {
    pub session_id: String,
    pub scores: ScoreSet,
    pub total: u32,
}

impl ScoresResponse {
    pub fn new(session_id: SessionId, scores: ScoreSet) -> Self {
        Self {
            session_id: session_id.to_string(),
            scores,
            total: scores.total(),
        }
    }
}

/// Feedback line for one dimension.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub dimension: Dimension,
    pub band: Band,
    pub symbol: &'static str,
    pub message: &'static str,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            dimension: feedback.dimension,
            band: feedback.band,
            symbol: feedback.band.symbol(),
            message: feedback.message,
        }
    }
}

/// Results section.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub submitted_at: String,
    pub percentages: PercentageSet,
    pub lines: Vec<String>,
    pub feedback: Vec<FeedbackResponse>,
    pub chart: BarChart,
}

impl From<ResultsView> for ResultsResponse {
    fn from(view: ResultsView) -> Self {
        let report = view.report;
        Self {
            submitted_at: view.submitted_at.as_datetime().to_rfc3339(),
            percentages: report.percentages,
            lines: report.lines.into_iter().map(|line| line.display).collect(),
            feedback: report.feedback.into_iter().map(Into::into).collect(),
            chart: report.chart,
        }
    }
}

/// Advanced insights section.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsResponse {
    pub introduction: &'static str,
    pub predicted_category: String,
    pub algorithm: &'static str,
    pub training_samples: usize,
    pub held_out_samples: usize,
    pub reproducible: bool,
}

impl From<Insight> for InsightsResponse {
    fn from(insight: Insight) -> Self {
        Self {
            introduction: INSIGHTS_INTRO,
            predicted_category: insight.category.label().to_string(),
            algorithm: insight.algorithm,
            training_samples: insight.training_samples,
            held_out_samples: insight.held_out_samples,
            reproducible: insight.reproducible,
        }
    }
}

/// Section body that either carries data or says the assessment is missing.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionResponse<T> {
    NotCompleted { message: &'static str },
    Completed(T),
}

impl<T> SectionResponse<T> {
    /// Maps a domain outcome, using `message` when no scores exist.
    pub fn from_outcome<U: Into<T>>(outcome: SectionOutcome<U>, message: &'static str) -> Self {
        match outcome {
            SectionOutcome::NotCompleted => SectionResponse::NotCompleted { message },
            SectionOutcome::Ready(value) => SectionResponse::Completed(value.into()),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Malformed path or body that never reached the domain.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&AssessmentError> for ErrorResponse {
    fn from(error: &AssessmentError) -> Self {
        let details = match error {
            AssessmentError::Validation(e) => Some(serde_json::json!({ "field": e.field() })),
            _ => None,
        };
        Self {
            code: error.code().to_string(),
            message: error.message(),
            details,
        }
    }
}
