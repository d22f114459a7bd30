use crate::assessment::AssessmentError;
use crate::config::ConfigError;
use crate::import::SampleImportError;
use crate::quality::EvaluationError;
use crate::telemetry::TelemetryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("{0}")]
    Evaluation(#[from] EvaluationError),
    #[error("{0}")]
    Assessment(#[from] AssessmentError),
    #[error("{0}")]
    Import(#[from] SampleImportError),
    #[error("invalid sample document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Evaluation(err) | AppError::Assessment(AssessmentError::Evaluation(err)) => {
                evaluation_status(err)
            }
            AppError::Assessment(AssessmentError::Prediction(_)) => StatusCode::BAD_GATEWAY,
            AppError::Import(_) | AppError::Json(_) | AppError::Body(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn evaluation_status(err: &EvaluationError) -> StatusCode {
    match err {
        EvaluationError::UnknownDomain(_) => StatusCode::NOT_FOUND,
        EvaluationError::MissingFields { .. }
        | EvaluationError::InvalidValue { .. }
        | EvaluationError::DomainMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
