//! Threshold-driven quality evaluation for milk, water, and wine samples.
//!
//! Each domain is described by a static metric table (`catalog`). The evaluator,
//! recommendation generator and chart builder are written once and driven by
//! those tables.

pub mod catalog;
pub mod charts;
pub mod domain;
pub mod evaluation;
pub mod recommendation;
pub mod sample;

pub use catalog::{find_metric, metric_definitions};
pub use charts::{build_chart_view_models, ChartViewModelSet};
pub use domain::{Classification, Direction, Domain, Ideal, MetricDefinition, ValueRange, Zone};
pub use evaluation::{evaluate, EvaluationError, EvaluationResult, MetricEvaluation};
pub use recommendation::{recommend, Recommendation};
pub use sample::{ParsedSample, RawValue, Sample};
