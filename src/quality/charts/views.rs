use super::super::domain::{Classification, Domain, ValueRange, Zone};
use serde::Serialize;

/// Library-agnostic plotting specs for one evaluated sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartViewModelSet {
    pub domain: Domain,
    pub bullets: Vec<BulletSpec>,
    pub comparison: ComparisonSpec,
    pub diverging: DivergingSpec,
}

/// Gauge/bullet chart for a single metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub range: ValueRange,
    pub zones: Vec<Zone>,
    pub ideal_marker: f64,
    pub current_marker: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSpec {
    pub dimensions: Vec<ComparisonDimension>,
}

/// One axis of a radar or parallel-coordinates plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonDimension {
    pub key: &'static str,
    pub label: &'static str,
    pub current_value: f64,
    pub ideal_value: f64,
    pub range: ValueRange,
    pub tick_labels: Vec<TickLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickLabel {
    pub value: f64,
    pub text: String,
}

/// Signed deviations per metric with a severity colour bucket each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivergingSpec {
    pub categories: Vec<&'static str>,
    pub deviations: Vec<f64>,
    pub color_by_severity: Vec<Classification>,
}
