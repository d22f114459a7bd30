//! Combines a prediction response with the local evaluation of the same sample.

use crate::prediction::{PredictionError, PredictionResponse, Verdict};
use crate::quality::{
    build_chart_view_models, evaluate, recommend, ChartViewModelSet, Domain, EvaluationError,
    EvaluationResult, Recommendation, Sample,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Assessment {
    Evaluated(Box<AssessmentReport>),
    /// The prediction failed, so the sample was never evaluated.
    Skipped { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub domain: Domain,
    pub verdict: Verdict,
    pub evaluation: EvaluationResult,
    pub recommendations: Vec<Recommendation>,
    pub summary: String,
    pub charts: ChartViewModelSet,
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

pub fn assess(
    domain: Domain,
    sample: &Sample,
    response: &PredictionResponse,
) -> Result<Assessment, AssessmentError> {
    if !response.is_success() {
        let message = response
            .message
            .clone()
            .unwrap_or_else(|| "prediction failed".to_string());
        return Ok(Assessment::Skipped { message });
    }

    let verdict = response.verdict(domain)?;
    let evaluation = evaluate(domain, sample)?.with_verdict(verdict.clone());
    let recommendations = recommend(domain, &evaluation)?;
    let charts = build_chart_view_models(domain, &evaluation)?;
    let summary = summary_text(domain, recommendations.is_empty());

    Ok(Assessment::Evaluated(Box::new(AssessmentReport {
        domain,
        verdict,
        evaluation,
        recommendations,
        summary,
        charts,
    })))
}

/// Lead-in shown above the recommendation list, or the all-clear message.
pub fn summary_text(domain: Domain, all_good: bool) -> String {
    if all_good {
        format!(
            "Your {domain} sample meets all {}! Continue maintaining these excellent conditions.",
            domain.standard_phrase()
        )
    } else {
        format!(
            "Based on your {domain} sample analysis, here are some recommendations to improve quality:"
        )
    }
}
