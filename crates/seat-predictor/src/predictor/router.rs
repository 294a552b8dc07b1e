use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Category, Programme};
use super::evaluation::{DecisionBasis, EligibilityDecision, EligibilityEvaluator};
use super::matrix::ProgrammeListing;
use super::session::DISCLAIMER;
use crate::error::AppError;

/// Router builder exposing the evaluator and the selectable programme/category lists.
pub fn eligibility_router(evaluator: Arc<EligibilityEvaluator>) -> Router {
    Router::new()
        .route("/api/v1/eligibility", post(evaluate_handler))
        .route("/api/v1/programmes", get(programmes_handler))
        .route("/api/v1/disclaimer", get(disclaimer_handler))
        .with_state(evaluator)
}

/// Raw form payload. Keys stay strings so unknown selections surface as invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub programme: String,
    pub category: String,
    #[serde(default)]
    pub overall_rank: Option<i64>,
    #[serde(default)]
    pub category_rank: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityResponse {
    pub programme: Programme,
    pub category: Category,
    pub eligible: bool,
    pub message: &'static str,
    pub basis: DecisionBasis,
}

impl EligibilityResponse {
    fn new(category: Category, decision: EligibilityDecision) -> Self {
        Self {
            programme: decision.programme,
            category,
            eligible: decision.eligible,
            message: decision.message(),
            basis: decision.basis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgrammesResponse {
    pub cycle: String,
    pub programmes: Vec<ProgrammeListing>,
}

pub(crate) async fn evaluate_handler(
    State(evaluator): State<Arc<EligibilityEvaluator>>,
    axum::Json(request): axum::Json<EligibilityRequest>,
) -> Result<axum::Json<EligibilityResponse>, AppError> {
    let programme = request.programme.parse::<Programme>()?;
    let category = request.category.parse::<Category>()?;
    let decision = evaluator.evaluate(
        programme,
        category,
        request.overall_rank,
        request.category_rank,
    )?;

    Ok(axum::Json(EligibilityResponse::new(category, decision)))
}

pub(crate) async fn programmes_handler(
    State(evaluator): State<Arc<EligibilityEvaluator>>,
) -> axum::Json<ProgrammesResponse> {
    let matrix = evaluator.matrix();
    axum::Json(ProgrammesResponse {
        cycle: matrix.cycle().to_string(),
        programmes: matrix.listing(),
    })
}

pub(crate) async fn disclaimer_handler() -> axum::Json<serde_json::Value> {
    axum::Json(json!({ "disclaimer": DISCLAIMER }))
}
