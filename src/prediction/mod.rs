//! Prediction service contract and per-domain verdict interpretation.

mod heuristics;

pub use heuristics::HeuristicPredictor;

use crate::quality::{Domain, Sample};
use serde::{Deserialize, Serialize};

/// Seam for anything that classifies a whole sample, model-backed or not.
pub trait QualityPredictor: Send + Sync {
    fn predict(&self, domain: Domain, sample: &Sample) -> PredictionResponse;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionStatus {
    Success,
    #[serde(other)]
    Error,
}

/// Class label or score as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionValue {
    Integer(i64),
    Decimal(f64),
    Label(String),
}

impl PredictionValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            PredictionValue::Integer(value) => Some(*value as f64),
            PredictionValue::Decimal(value) => Some(*value),
            PredictionValue::Label(text) => text.trim().parse().ok(),
        }
    }
}

/// Response body of the prediction endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub status: PredictionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PredictionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PredictionResponse {
    pub fn success(prediction: PredictionValue, confidence: f64) -> Self {
        Self {
            status: PredictionStatus::Success,
            prediction: Some(prediction),
            confidence: Some(confidence),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: PredictionStatus::Error,
            prediction: None,
            confidence: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PredictionStatus::Success
    }

    /// Interprets the raw prediction the way each domain page labels it.
    pub fn verdict(&self, domain: Domain) -> Result<Verdict, PredictionError> {
        let prediction = self
            .prediction
            .as_ref()
            .ok_or(PredictionError::MissingPrediction)?;
        let unrecognized = || PredictionError::UnrecognizedPrediction {
            domain,
            prediction: prediction_text(prediction),
        };

        let (grade, label, score) = match domain {
            Domain::Milk => {
                let PredictionValue::Label(text) = prediction else {
                    return Err(unrecognized());
                };
                let grade = match text.trim().to_ascii_lowercase().as_str() {
                    "high" | "good" => VerdictGrade::High,
                    "medium" => VerdictGrade::Medium,
                    "low" | "bad" => VerdictGrade::Low,
                    _ => return Err(unrecognized()),
                };
                (grade, text.trim().to_uppercase(), None)
            }
            Domain::Water => match prediction.as_number() {
                Some(value) if value == 1.0 => (VerdictGrade::High, "Potable".to_string(), None),
                Some(value) if value == 0.0 => {
                    (VerdictGrade::Low, "Not Potable".to_string(), None)
                }
                _ => return Err(unrecognized()),
            },
            Domain::Wine => {
                let score = prediction.as_number().ok_or_else(unrecognized)?;
                let grade = if score <= 4.0 {
                    VerdictGrade::Low
                } else if score <= 6.0 {
                    VerdictGrade::Medium
                } else {
                    VerdictGrade::High
                };
                (grade, grade.label().to_string(), Some(score))
            }
        };

        Ok(Verdict {
            grade,
            label,
            confidence: self.confidence,
            score,
        })
    }
}

fn prediction_text(prediction: &PredictionValue) -> String {
    match prediction {
        PredictionValue::Integer(value) => value.to_string(),
        PredictionValue::Decimal(value) => value.to_string(),
        PredictionValue::Label(text) => text.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictGrade {
    High,
    Medium,
    Low,
}

impl VerdictGrade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Overall classification attached to an evaluation; never computed locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub grade: VerdictGrade,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("prediction response carried no prediction")]
    MissingPrediction,
    #[error("unrecognized {domain} prediction '{prediction}'")]
    UnrecognizedPrediction { domain: Domain, prediction: String },
}
