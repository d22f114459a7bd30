use super::super::domain::{Classification, MetricDefinition};
use super::MetricEvaluation;

pub(crate) fn evaluate_metric(definition: &'static MetricDefinition, value: f64) -> MetricEvaluation {
    let placement = definition.classify(value);

    MetricEvaluation {
        key: definition.key,
        label: definition.label,
        raw_value: value,
        zone: placement.classification,
        deviation: definition.deviation(value),
        is_good: placement.classification == Classification::Good,
        out_of_range: placement.out_of_range,
    }
}

/// Buckets a direction-normalized deviation against a severity threshold.
pub(crate) fn severity_bucket(deviation: f64, threshold: f64) -> Classification {
    let magnitude = deviation.abs();
    if magnitude < threshold * 0.5 {
        Classification::Good
    } else if magnitude < threshold {
        Classification::Warning
    } else {
        Classification::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_split_at_half_and_full_threshold() {
        assert_eq!(severity_bucket(0.0, 1.0), Classification::Good);
        assert_eq!(severity_bucket(-0.49, 1.0), Classification::Good);
        assert_eq!(severity_bucket(0.5, 1.0), Classification::Warning);
        assert_eq!(severity_bucket(-0.99, 1.0), Classification::Warning);
        assert_eq!(severity_bucket(1.0, 1.0), Classification::Poor);
    }
}
