use std::sync::Arc;

use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::predictor::domain::{Category, Programme};
use crate::predictor::evaluation::EligibilityEvaluator;
use crate::predictor::matrix::{CutoffTable, SeatMatrix};
use crate::predictor::router::eligibility_router;

pub(super) fn evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::builtin()
}

/// Small matrix where the five-year table does not list SC.
pub(super) fn trial_matrix() -> Arc<SeatMatrix> {
    let three = CutoffTable::new(
        Programme::ThreeYear,
        [
            (Category::StateMerit, 10),
            (Category::Sc, 2),
            (Category::Pd, 4),
        ],
    )
    .expect("valid three-year table");
    let five = CutoffTable::new(
        Programme::FiveYear,
        [(Category::StateMerit, 8), (Category::Ews, 3)],
    )
    .expect("valid five-year table");
    Arc::new(SeatMatrix::new("trial", [three, five]).expect("valid matrix"))
}

pub(super) fn three_year_only_matrix() -> Arc<SeatMatrix> {
    let three = CutoffTable::new(Programme::ThreeYear, [(Category::StateMerit, 10)])
        .expect("valid table");
    Arc::new(SeatMatrix::new("three-year only", [three]).expect("valid matrix"))
}

pub(super) fn trial_evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::new(trial_matrix())
}

pub(super) fn router_with(evaluator: EligibilityEvaluator) -> axum::Router {
    eligibility_router(Arc::new(evaluator))
}

pub(super) fn json_post(uri: &str, payload: &Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("payload serializes"),
        ))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
