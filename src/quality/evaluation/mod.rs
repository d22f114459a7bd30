mod rules;

pub(crate) use rules::severity_bucket;

use super::domain::{Classification, Domain};
use super::sample::{ParsedSample, Sample};
use crate::prediction::Verdict;
use serde::Serialize;

/// Validation failures raised before any result is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("unknown domain '{0}'")]
    UnknownDomain(String),
    #[error("missing required fields: {}", .keys.join(", "))]
    MissingFields { keys: Vec<String> },
    #[error("invalid value '{raw_value}' for field '{key}'")]
    InvalidValue { key: String, raw_value: String },
    #[error("evaluation result belongs to {found}, expected {expected}")]
    DomainMismatch { expected: Domain, found: Domain },
}

/// Per-field outcome of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricEvaluation {
    pub key: &'static str,
    pub label: &'static str,
    pub raw_value: f64,
    pub zone: Classification,
    /// Positive means better than ideal, or above it for target-value metrics.
    pub deviation: f64,
    pub is_good: bool,
    pub out_of_range: bool,
}

/// Evaluation of one sample; metrics appear in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub domain: Domain,
    pub metrics: Vec<MetricEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_verdict: Option<Verdict>,
}

impl EvaluationResult {
    pub fn metric(&self, key: &str) -> Option<&MetricEvaluation> {
        self.metrics.iter().find(|metric| metric.key == key)
    }

    pub fn all_good(&self) -> bool {
        self.metrics.iter().all(|metric| metric.is_good)
    }

    pub fn non_good_count(&self) -> usize {
        self.metrics.iter().filter(|metric| !metric.is_good).count()
    }

    /// Attaches the prediction service's classification.
    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.overall_verdict = Some(verdict);
        self
    }

    pub(crate) fn ensure_domain(&self, expected: Domain) -> Result<(), EvaluationError> {
        if self.domain == expected {
            Ok(())
        } else {
            Err(EvaluationError::DomainMismatch {
                expected,
                found: self.domain,
            })
        }
    }
}

/// Classifies every field of `sample` against the domain's metric table.
pub fn evaluate(domain: Domain, sample: &Sample) -> Result<EvaluationResult, EvaluationError> {
    let parsed = ParsedSample::parse(domain, sample)?;
    Ok(evaluate_parsed(&parsed))
}

pub fn evaluate_parsed(parsed: &ParsedSample) -> EvaluationResult {
    let metrics = parsed
        .iter()
        .map(|(definition, value)| rules::evaluate_metric(definition, value))
        .collect();

    EvaluationResult {
        domain: parsed.domain(),
        metrics,
        overall_verdict: None,
    }
}
