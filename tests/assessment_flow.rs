//! Integration tests for the assessment flow.
//!
//! These tests drive a session through every section:
//! 1. Application handlers against the in-memory session store
//! 2. The HTTP router end to end, as a browser client would

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use religiousness_assessment::adapters::{
    assessment_router, AssessmentAppState, InMemorySessionStore, NearestCentroidClassifier,
    RandomForestClassifier,
};
use religiousness_assessment::application::{
    EndSessionCommand, EndSessionHandler, GetAdvancedInsightsHandler, GetAdvancedInsightsQuery,
    GetResultsHandler, GetResultsQuery, StartSessionHandler, SubmitAssessmentCommand,
    SubmitAssessmentHandler,
};
use religiousness_assessment::domain::foundation::{Dimension, Rating};
use religiousness_assessment::domain::insights::{Category, CategoryPredictor, PredictorSettings};
use religiousness_assessment::domain::questionnaire::AnswerSheet;
use religiousness_assessment::domain::scoring::Band;
use religiousness_assessment::domain::session::{AssessmentError, SectionOutcome};
use religiousness_assessment::ports::SessionStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn seeded_predictor(data_seed: u64) -> CategoryPredictor {
    CategoryPredictor::new(
        Arc::new(RandomForestClassifier::new(30, 42)),
        PredictorSettings {
            data_seed: Some(data_seed),
            ..PredictorSettings::default()
        },
    )
}

fn router() -> Router {
    let state = AssessmentAppState::new(
        Arc::new(InMemorySessionStore::new()),
        CategoryPredictor::new(
            Arc::new(NearestCentroidClassifier),
            PredictorSettings {
                data_seed: Some(11),
                ..PredictorSettings::default()
            },
        ),
    );
    assessment_router().with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: String) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: String, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// Handler flow
// =============================================================================

#[tokio::test]
async fn maximum_answers_give_equal_quarters_in_low_band() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let session_id = StartSessionHandler::new(store.clone())
        .handle()
        .await
        .unwrap()
        .session_id;

    let submitted = SubmitAssessmentHandler::new(store.clone())
        .handle(SubmitAssessmentCommand {
            session_id,
            answers: AnswerSheet::uniform(Rating::StronglyAgree),
        })
        .await
        .unwrap();
    assert_eq!(submitted.scores.as_array(), [25, 25, 25, 25]);

    let outcome = GetResultsHandler::new(store)
        .handle(GetResultsQuery { session_id })
        .await
        .unwrap();
    let SectionOutcome::Ready(view) = outcome else {
        panic!("results should be ready after submission");
    };

    for dimension in Dimension::ALL {
        assert_eq!(view.report.percentages.get(dimension).value(), 25.0);
    }
    assert!(view.report.feedback.iter().all(|f| f.band == Band::Low));
    assert_eq!(view.report.lines[0].display, "Physicality: 25.00%");
}

#[tokio::test]
async fn default_answers_give_exact_quarters() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let session_id = StartSessionHandler::new(store.clone())
        .handle()
        .await
        .unwrap()
        .session_id;

    SubmitAssessmentHandler::new(store.clone())
        .handle(SubmitAssessmentCommand {
            session_id,
            answers: AnswerSheet::new(),
        })
        .await
        .unwrap();

    let SectionOutcome::Ready(view) = GetResultsHandler::new(store)
        .handle(GetResultsQuery { session_id })
        .await
        .unwrap()
    else {
        panic!("results should be ready after submission");
    };

    assert_eq!(view.report.scores.as_array(), [15, 15, 15, 15]);
    assert!(view
        .report
        .percentages
        .iter()
        .all(|(_, p)| p.value() == 25.0));
}

#[tokio::test]
async fn sections_before_assessment_report_not_completed() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let session_id = StartSessionHandler::new(store.clone())
        .handle()
        .await
        .unwrap()
        .session_id;

    let results = GetResultsHandler::new(store.clone())
        .handle(GetResultsQuery { session_id })
        .await
        .unwrap();
    let insights = GetAdvancedInsightsHandler::new(store, seeded_predictor(1))
        .handle(GetAdvancedInsightsQuery { session_id })
        .await
        .unwrap();

    assert_eq!(results, SectionOutcome::NotCompleted);
    assert_eq!(insights, SectionOutcome::NotCompleted);
}

#[tokio::test]
async fn fixed_seeds_make_insights_reproducible() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let session_id = StartSessionHandler::new(store.clone())
        .handle()
        .await
        .unwrap()
        .session_id;

    let mut answers = AnswerSheet::new();
    answers.set_dimension(Dimension::Spiritual, [Rating::StronglyAgree; 5]);
    answers.set_dimension(Dimension::Scientific, [Rating::Disagree; 5]);
    SubmitAssessmentHandler::new(store.clone())
        .handle(SubmitAssessmentCommand {
            session_id,
            answers,
        })
        .await
        .unwrap();

    let handler = GetAdvancedInsightsHandler::new(store, seeded_predictor(77));
    let first = handler
        .handle(GetAdvancedInsightsQuery { session_id })
        .await
        .unwrap();
    let second = handler
        .handle(GetAdvancedInsightsQuery { session_id })
        .await
        .unwrap();

    let SectionOutcome::Ready(insight) = &first else {
        panic!("insights should be ready after submission");
    };
    assert!(Category::ALL.contains(&insight.category));
    assert_eq!(insight.training_samples, 80);
    assert_eq!(first, second);
}

#[tokio::test]
async fn ended_session_is_forgotten() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let session_id = StartSessionHandler::new(store.clone())
        .handle()
        .await
        .unwrap()
        .session_id;

    SubmitAssessmentHandler::new(store.clone())
        .handle(SubmitAssessmentCommand {
            session_id,
            answers: AnswerSheet::new(),
        })
        .await
        .unwrap();
    EndSessionHandler::new(store.clone())
        .handle(EndSessionCommand { session_id })
        .await
        .unwrap();

    let err = GetResultsHandler::new(store.clone())
        .handle(GetResultsQuery { session_id })
        .await
        .unwrap_err();
    assert_eq!(err, AssessmentError::SessionNotFound(session_id));

    let err = SubmitAssessmentHandler::new(store)
        .handle(SubmitAssessmentCommand {
            session_id,
            answers: AnswerSheet::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, AssessmentError::SessionNotFound(session_id));
}

#[tokio::test]
async fn idle_sessions_expire() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let session_id = StartSessionHandler::new(store.clone())
        .handle()
        .await
        .unwrap()
        .session_id;
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let evicted = store
        .evict_idle(std::time::Duration::from_millis(1))
        .await
        .unwrap();
    assert_eq!(evicted, 1);

    let err = GetAdvancedInsightsHandler::new(store, seeded_predictor(5))
        .handle(GetAdvancedInsightsQuery { session_id })
        .await
        .unwrap_err();
    assert_eq!(err, AssessmentError::SessionNotFound(session_id));
}

#[tokio::test]
async fn sessions_do_not_share_scores() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let start = StartSessionHandler::new(store.clone());
    let first = start.handle().await.unwrap().session_id;
    let second = start.handle().await.unwrap().session_id;

    SubmitAssessmentHandler::new(store.clone())
        .handle(SubmitAssessmentCommand {
            session_id: first,
            answers: AnswerSheet::new(),
        })
        .await
        .unwrap();

    let outcome = GetResultsHandler::new(store)
        .handle(GetResultsQuery { session_id: second })
        .await
        .unwrap();
    assert_eq!(outcome, SectionOutcome::NotCompleted);
}

// =============================================================================
// HTTP flow
// =============================================================================

#[tokio::test]
async fn http_flow_covers_every_section() {
    let app = router();

    let (status, intro) = send(&app, get("/api/introduction".to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        intro["title"],
        "Religiousness Assessment Tool with Advanced Insights"
    );

    let (status, questionnaire) = send(&app, get("/api/questionnaire".to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(questionnaire["scale"], json!({"min": 1, "max": 5, "default": 3}));

    let (status, started) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/sessions")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let session_id = started["session_id"].as_str().unwrap().to_string();

    let (status, insights) = send(&app, get(format!("/api/sessions/{}/insights", session_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(insights["status"], "not_completed");
    assert_eq!(
        insights["message"],
        "Complete the assessment first to get advanced insights."
    );

    let (status, scores) = send(
        &app,
        post_json(
            format!("/api/sessions/{}/assessment", session_id),
            json!({
                "responses": {
                    "Physicality": [5, 5, 5, 5, 5],
                    "Psychological": [5, 5, 5, 5, 5],
                    "Scientific": [5, 5, 5, 5, 5],
                    "Spiritual": [5, 5, 5, 5, 5]
                }
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scores["total"], 100);

    let (status, results) = send(&app, get(format!("/api/sessions/{}/results", session_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results["status"], "completed");
    assert_eq!(results["lines"][2], "Scientific: 25.00%");
    assert_eq!(results["feedback"][0]["band"], "low");
    assert_eq!(results["chart"]["series"], "Score Percentage");

    let (status, insights) = send(&app, get(format!("/api/sessions/{}/insights", session_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(insights["status"], "completed");
    let label = insights["predicted_category"].as_str().unwrap();
    assert!(Category::ALL.iter().any(|c| c.label() == label));

    let (status, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/sessions/{}", session_id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, results) = send(&app, get(format!("/api/sessions/{}/results", session_id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(results["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn http_rejects_malformed_input() {
    let app = router();

    let (status, body) = send(&app, get("/api/sessions/not-a-uuid/results".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (_, started) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/sessions")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let session_id = started["session_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        post_json(
            format!("/api/sessions/{}/assessment", session_id),
            json!({ "responses": { "Spiritual": [3, 3, 3, 3] } }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "Spiritual responses");

    let (status, body) = send(
        &app,
        post_json(
            format!("/api/sessions/{}/assessment", session_id),
            json!({ "responses": { "Physicality": [5, 5, 300, 5, 5] } }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUT_OF_RANGE");

    let (status, body) = send(
        &app,
        get(format!("/api/sessions/{}/insights", uuid::Uuid::new_v4())),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}
