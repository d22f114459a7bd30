use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use metrics_exporter_prometheus::PrometheusBuilder;
use sample_quality::http::{router, AppState};
use sample_quality::prediction::{PredictionResponse, QualityPredictor};
use sample_quality::quality::{Domain, Sample};
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower::ServiceExt;

fn state() -> AppState {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    AppState::new(handle)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn read_json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

fn milk_form() -> Value {
    json!({
        "pH": "6.6",
        "temperature": "4",
        "colour": "254",
        "taste": "1",
        "odor": "1",
        "fat": "1",
        "turbidity": "0"
    })
}

#[tokio::test]
async fn readiness_reflects_the_flag() {
    let state = state();
    let app = router(state.clone());

    let response = app
        .clone()
        .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    state.readiness.store(true, Ordering::Release);
    let response = app
        .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await["status"], "ready");
}

#[tokio::test]
async fn milk_prediction_matches_the_service_contract() {
    let response = router(state())
        .oneshot(post_json("/api/predict", milk_form()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "success");
    assert_eq!(payload["prediction"], "high");
    assert_eq!(payload["confidence"], 0.92);
}

#[tokio::test]
async fn incomplete_water_prediction_returns_bad_request() {
    let response = router(state())
        .oneshot(post_json("/api/predict_water", json!({ "ph": "7.0" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "error");
    assert!(payload["message"]
        .as_str()
        .is_some_and(|message| message.contains("hardness")));
}

#[tokio::test]
async fn malformed_bodies_use_the_error_envelope() {
    let request = Request::post("/api/predict_wine")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("valid request");

    let response = router(state()).oneshot(request).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json_body(response).await["status"], "error");
}

#[tokio::test]
async fn assessment_combines_verdict_recommendations_and_charts() {
    let mut form = milk_form();
    form["temperature"] = json!(45);

    let response = router(state())
        .oneshot(post_json("/api/v1/assessments/Milk", form))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["outcome"], "evaluated");
    assert!(payload["evaluated_at"].is_string());
    assert_eq!(payload["verdict"]["label"], "LOW");
    assert_eq!(payload["evaluation"]["metrics"].as_array().map(Vec::len), Some(7));
    assert_eq!(payload["recommendations"][0]["metric_key"], "temperature");
    assert_eq!(payload["recommendations"][0]["severity"], "warning");
    assert_eq!(payload["charts"]["bullets"].as_array().map(Vec::len), Some(7));
}

#[tokio::test]
async fn invalid_values_skip_the_assessment_when_prediction_fails() {
    let mut form = milk_form();
    form["colour"] = json!("pale");

    let response = router(state())
        .oneshot(post_json("/api/v1/assessments/milk", form))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["outcome"], "skipped");
    assert_eq!(payload["message"], "invalid value 'pale' for field 'colour'");
}

#[tokio::test]
async fn malformed_assessment_bodies_use_the_error_envelope() {
    let request = Request::post("/api/v1/assessments/milk")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("valid request");

    let response = router(state()).oneshot(request).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(&b"application/json"[..])
    );
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("invalid request body")));
}

#[tokio::test]
async fn assessment_bodies_without_json_content_type_are_bad_requests() {
    let request = Request::post("/api/v1/assessments/water")
        .body(Body::from(milk_form().to_string()))
        .expect("valid request");

    let response = router(state()).oneshot(request).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_json_body(response).await["error"].is_string());
}

struct FixedPredictor;

impl QualityPredictor for FixedPredictor {
    fn predict(&self, _domain: Domain, _sample: &Sample) -> PredictionResponse {
        PredictionResponse::success(sample_quality::prediction::PredictionValue::Integer(1), 0.5)
    }
}

#[tokio::test]
async fn evaluation_errors_are_unprocessable_once_prediction_succeeds() {
    let state = state().with_predictor(Arc::new(FixedPredictor));
    let response = router(state)
        .oneshot(post_json("/api/v1/assessments/water", json!({ "ph": 7 })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("missing required fields: hardness")));
}

#[tokio::test]
async fn unknown_domains_are_not_found() {
    let response = router(state())
        .oneshot(
            Request::get("/api/v1/domains/beer/metrics")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json_body(response).await["error"], "unknown domain 'beer'");
}

#[tokio::test]
async fn domain_metrics_list_definitions_in_order() {
    let response = router(state())
        .oneshot(
            Request::get("/api/v1/domains/wine/metrics")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["domain"], "wine");
    assert_eq!(payload["metrics"][0]["key"], "fixed_acidity");
    assert_eq!(payload["metrics"][3]["ideal"]["kind"], "band");
    assert_eq!(payload["metrics"][7]["threshold"], 0.002);
}
