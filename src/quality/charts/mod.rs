mod views;

pub use views::{
    BulletSpec, ChartViewModelSet, ComparisonDimension, ComparisonSpec, DivergingSpec, TickLabel,
};

use super::catalog::metric_definitions;
use super::domain::{Domain, MetricDefinition};
use super::evaluation::{severity_bucket, EvaluationError, EvaluationResult};

/// Builds bullet, comparison and diverging specs from an evaluation.
pub fn build_chart_view_models(
    domain: Domain,
    result: &EvaluationResult,
) -> Result<ChartViewModelSet, EvaluationError> {
    result.ensure_domain(domain)?;

    let evaluated: Vec<_> = metric_definitions(domain)
        .iter()
        .filter_map(|definition| result.metric(definition.key).map(|metric| (definition, metric)))
        .collect();

    let bullets = evaluated
        .iter()
        .map(|(definition, metric)| BulletSpec {
            key: definition.key,
            label: definition.label,
            range: definition.valid_range,
            zones: definition.zones.to_vec(),
            ideal_marker: definition.ideal.marker(),
            current_marker: metric.raw_value,
            unit: definition.unit,
        })
        .collect();

    let dimensions = evaluated
        .iter()
        .map(|(definition, metric)| ComparisonDimension {
            key: definition.key,
            label: definition.label,
            current_value: metric.raw_value,
            ideal_value: definition.ideal.marker(),
            range: definition.valid_range,
            tick_labels: tick_labels(definition),
        })
        .collect();

    let diverging = DivergingSpec {
        categories: evaluated.iter().map(|(definition, _)| definition.label).collect(),
        deviations: evaluated.iter().map(|(_, metric)| metric.deviation).collect(),
        color_by_severity: evaluated
            .iter()
            .map(|(definition, metric)| {
                severity_bucket(metric.deviation, definition.severity_threshold())
            })
            .collect(),
    };

    Ok(ChartViewModelSet {
        domain,
        bullets,
        comparison: ComparisonSpec { dimensions },
        diverging,
    })
}

/// Ticks at every zone boundary plus the ideal, ascending and de-duplicated.
fn tick_labels(definition: &MetricDefinition) -> Vec<TickLabel> {
    let ideal = definition.ideal.marker();
    let mut values: Vec<f64> = definition.zones.iter().map(|zone| zone.min).collect();
    if let Some(last) = definition.zones.last() {
        values.push(last.max);
    }
    values.push(ideal);
    values.sort_by(f64::total_cmp);
    values.dedup();

    values
        .into_iter()
        .map(|value| {
            let text = if value == ideal {
                format!("{value} (Ideal)")
            } else {
                let classification = definition.classify(value).classification;
                format!("{value} ({})", classification.label())
            };
            TickLabel { value, text }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::catalog::find_metric;
    use crate::quality::domain::Classification;
    use crate::quality::evaluation::evaluate;
    use crate::quality::sample::Sample;

    fn good_milk() -> Sample {
        [
            ("pH", 6.8),
            ("temperature", 37.0),
            ("colour", 253.0),
            ("taste", 1.0),
            ("odor", 1.0),
            ("fat", 1.0),
            ("turbidity", 0.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn ticks_mark_zone_boundaries_and_ideal() {
        let ph = find_metric(Domain::Milk, "pH").expect("pH defined");
        let texts: Vec<_> = tick_labels(ph).into_iter().map(|tick| tick.text).collect();
        assert_eq!(
            texts,
            ["3 (Poor)", "6.5 (Good)", "6.8 (Ideal)", "7 (Good)", "9.5 (Warning)"]
        );
    }

    #[test]
    fn ideal_sitting_on_a_boundary_is_listed_once() {
        let chloramines = find_metric(Domain::Water, "chloramines").expect("defined");
        let ticks = tick_labels(chloramines);
        assert_eq!(ticks.iter().filter(|tick| tick.value == 4.0).count(), 1);
        assert!(ticks.iter().any(|tick| tick.text == "4 (Ideal)"));
    }

    #[test]
    fn diverging_colours_follow_severity_buckets() {
        let result = evaluate(Domain::Milk, &good_milk()).expect("valid sample");
        let charts = build_chart_view_models(Domain::Milk, &result).expect("same domain");

        assert_eq!(charts.diverging.categories.len(), 7);
        assert!(charts
            .diverging
            .color_by_severity
            .iter()
            .all(|severity| *severity == Classification::Good));
    }
}
