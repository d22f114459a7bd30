use crate::assessment::{assess, Assessment};
use crate::error::AppError;
use crate::prediction::{HeuristicPredictor, PredictionResponse, QualityPredictor};
use crate::quality::{metric_definitions, Domain, MetricDefinition, Sample};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
    pub predictor: Arc<dyn QualityPredictor>,
}

impl AppState {
    pub fn new(metrics: PrometheusHandle) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            predictor: Arc::new(HeuristicPredictor::new()),
        }
    }

    pub fn with_predictor(mut self, predictor: Arc<dyn QualityPredictor>) -> Self {
        self.predictor = predictor;
        self
    }
}

#[derive(Debug, Serialize)]
pub struct AssessmentEnvelope {
    pub evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub assessment: Assessment,
}

#[derive(Debug, Serialize)]
pub struct DomainMetricsView {
    pub domain: Domain,
    pub metrics: &'static [MetricDefinition],
}

/// Prediction, assessment and catalog endpoints plus health checks.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/predict", post(predict_milk))
        .route("/api/predict_water", post(predict_water))
        .route("/api/predict_wine", post(predict_wine))
        .route("/api/v1/assessments/:domain", post(assessment_endpoint))
        .route("/api/v1/domains/:domain/metrics", get(domain_metrics_endpoint))
        .with_state(state)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn predict_milk(
    State(state): State<AppState>,
    payload: Result<Json<Sample>, JsonRejection>,
) -> Response {
    predict(&state, Domain::Milk, payload)
}

async fn predict_water(
    State(state): State<AppState>,
    payload: Result<Json<Sample>, JsonRejection>,
) -> Response {
    predict(&state, Domain::Water, payload)
}

async fn predict_wine(
    State(state): State<AppState>,
    payload: Result<Json<Sample>, JsonRejection>,
) -> Response {
    predict(&state, Domain::Wine, payload)
}

fn predict(
    state: &AppState,
    domain: Domain,
    payload: Result<Json<Sample>, JsonRejection>,
) -> Response {
    let response = match payload {
        Ok(Json(sample)) => state.predictor.predict(domain, &sample),
        Err(rejection) => PredictionResponse::error(rejection.body_text()),
    };

    if response.is_success() {
        info!(%domain, "prediction served");
        (StatusCode::OK, Json(response)).into_response()
    } else {
        warn!(%domain, message = ?response.message, "prediction rejected");
        (StatusCode::BAD_REQUEST, Json(response)).into_response()
    }
}

async fn assessment_endpoint(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    payload: Result<Json<Sample>, JsonRejection>,
) -> Result<Json<AssessmentEnvelope>, AppError> {
    let domain: Domain = domain.parse()?;
    let Json(sample) = payload?;
    let prediction = state.predictor.predict(domain, &sample);
    let assessment = assess(domain, &sample, &prediction)?;

    match &assessment {
        Assessment::Evaluated(report) => info!(
            %domain,
            non_good = report.evaluation.non_good_count(),
            verdict = %report.verdict.label,
            "sample assessed"
        ),
        Assessment::Skipped { message } => warn!(%domain, %message, "assessment skipped"),
    }

    Ok(Json(AssessmentEnvelope {
        evaluated_at: Utc::now(),
        assessment,
    }))
}

async fn domain_metrics_endpoint(
    Path(domain): Path<String>,
) -> Result<Json<DomainMetricsView>, AppError> {
    let domain: Domain = domain.parse()?;
    Ok(Json(DomainMetricsView {
        domain,
        metrics: metric_definitions(domain),
    }))
}
