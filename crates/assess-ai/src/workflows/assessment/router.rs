use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentSelection, ResponseMap};
use super::service::{AssessmentError, AssessmentService};

/// Router builder exposing HTTP endpoints for composing and scoring
/// assessments.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route(
            "/api/v1/assessments/generate",
            post(generate_handler),
        )
        .route("/api/v1/assessments/score", post(score_handler))
        .route("/api/v1/catalog/dimensions", get(dimensions_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    #[serde(flatten)]
    pub(crate) selection: AssessmentSelection,
    #[serde(default)]
    pub(crate) responses: ResponseMap,
}

pub(crate) async fn generate_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(selection): axum::Json<AssessmentSelection>,
) -> Response {
    match service.generate(&selection) {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    match service.score(&request.selection, &request.responses) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn dimensions_handler(
    State(service): State<Arc<AssessmentService>>,
) -> Response {
    let catalog = service.catalog();
    let payload = json!({
        "personas": catalog.personas(),
        "therapeutic_areas": catalog.therapeutic_areas(),
        "model_types": catalog.model_types(),
        "deployment_scenarios": catalog.deployment_scenarios(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

/// Map engine errors to status codes, carrying the valid alternatives for
/// not-found failures so callers can correct the request.
fn error_response(error: AssessmentError) -> Response {
    let status = error.status_code();
    let body = match &error {
        AssessmentError::PersonaNotFound { known, .. } => json!({
            "error": error.to_string(),
            "known_personas": known,
        }),
        AssessmentError::SubPersonaNotFound { valid, .. } => json!({
            "error": error.to_string(),
            "valid_sub_personas": valid,
        }),
        AssessmentError::TherapeuticAreaNotFound { known, .. }
        | AssessmentError::ModelTypeNotFound { known, .. }
        | AssessmentError::DeploymentScenarioNotFound { known, .. } => json!({
            "error": error.to_string(),
            "known_ids": known,
        }),
        AssessmentError::Validation { issues } => json!({
            "error": "invalid selection",
            "issues": issues,
        }),
        AssessmentError::Composition { .. } => json!({
            "error": error.to_string(),
        }),
    };

    (status, axum::Json(body)).into_response()
}
