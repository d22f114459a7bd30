use super::catalog::metric_definitions;
use super::domain::{Classification, Domain, MetricDefinition};
use super::evaluation::{EvaluationError, EvaluationResult, MetricEvaluation};
use serde::Serialize;

/// Advisory entry for a metric that fell outside its good zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub metric_key: &'static str,
    pub severity: Classification,
    pub message: String,
}

/// One entry per non-good metric, in declaration order.
pub fn recommend(
    domain: Domain,
    result: &EvaluationResult,
) -> Result<Vec<Recommendation>, EvaluationError> {
    result.ensure_domain(domain)?;

    let recommendations = metric_definitions(domain)
        .iter()
        .filter_map(|definition| {
            let metric = result.metric(definition.key)?;
            (!metric.is_good).then(|| Recommendation {
                metric_key: definition.key,
                severity: metric.zone,
                message: render_message(definition, metric),
            })
        })
        .collect();

    Ok(recommendations)
}

fn render_message(definition: &MetricDefinition, metric: &MetricEvaluation) -> String {
    if definition.direction.is_binary() {
        return format!("{}: {}", definition.label, definition.advice.guidance);
    }

    let mut message = format!(
        "{} (Current: {}): {}",
        definition.label,
        definition.display_value(metric.raw_value),
        definition.advice.guidance
    );
    let position = definition.direction.position(metric.deviation);
    if let Some(hint) = definition.advice.hint(position) {
        message.push(' ');
        message.push_str(hint);
    }
    message
}
