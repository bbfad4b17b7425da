use crate::error::AppError;
use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use feedsieve::{Classifier, ContentItem, Diagnostics, PolicyConfig, Verdict};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct EvaluateRequest {
    #[serde(default)]
    pub(crate) text: Option<String>,
    #[serde(default)]
    pub(crate) structural_match: bool,
    #[serde(default)]
    pub(crate) policy: Option<PolicyConfig>,
}

impl EvaluateRequest {
    fn into_parts(self) -> (ContentItem, Option<PolicyConfig>) {
        let item = ContentItem {
            text: self.text,
            structural_match: self.structural_match,
        };
        (item, self.policy)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BatchItem {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) text: Option<String>,
    #[serde(default)]
    pub(crate) structural_match: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BatchRequest {
    pub(crate) items: Vec<BatchItem>,
    #[serde(default)]
    pub(crate) policy: Option<PolicyConfig>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchResult {
    pub(crate) id: String,
    pub(crate) verdict: Verdict,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchResponse {
    /// Distinct (id, content) pairs classified; exact repeats reuse the first verdict.
    pub(crate) evaluated: usize,
    pub(crate) results: Vec<BatchResult>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/evaluate", post(evaluate_endpoint))
        .route("/api/v1/explain", post(explain_endpoint))
        .route("/api/v1/evaluate/batch", post(batch_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluate_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<Verdict>, AppError> {
    let Json(request) = payload?;
    let (item, policy) = request.into_parts();
    let classifier = Classifier::new(state.policy_or_default(policy));
    Ok(Json(classifier.evaluate(&item)))
}

pub(crate) async fn explain_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<Diagnostics>, AppError> {
    let Json(request) = payload?;
    let (item, policy) = request.into_parts();
    let classifier = Classifier::new(state.policy_or_default(policy));
    Ok(Json(classifier.explain(&item)))
}

pub(crate) async fn batch_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>, AppError> {
    let Json(request) = payload?;
    let classifier = Classifier::new(state.policy_or_default(request.policy));

    // Edited content under a known id is a new document and gets a fresh verdict.
    let mut seen: HashMap<(String, ContentItem), Verdict> = HashMap::new();
    let mut results = Vec::with_capacity(request.items.len());
    for BatchItem {
        id,
        text,
        structural_match,
    } in request.items
    {
        let key = (
            id,
            ContentItem {
                text,
                structural_match,
            },
        );
        let verdict = match seen.get(&key) {
            Some(verdict) => verdict.clone(),
            None => {
                let verdict = classifier.evaluate(&key.1);
                seen.insert(key.clone(), verdict.clone());
                verdict
            }
        };
        results.push(BatchResult { id: key.0, verdict });
    }

    debug!(
        items = results.len(),
        evaluated = seen.len(),
        "batch classified"
    );

    Ok(Json(BatchResponse {
        evaluated: seen.len(),
        results,
    }))
}
