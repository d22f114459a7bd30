use sample_quality::assessment::Assessment;
use sample_quality::quality::{Domain, Ideal, MetricDefinition};

pub(crate) fn render_assessment(assessment: &Assessment) -> String {
    let report = match assessment {
        Assessment::Skipped { message } => return format!("Prediction failed: {message}\n"),
        Assessment::Evaluated(report) => report,
    };

    let mut lines = Vec::new();
    let verdict = &report.verdict;
    match (verdict.score, verdict.confidence) {
        (Some(score), Some(confidence)) => lines.push(format!(
            "Predicted Quality: {} (Score: {score}/10, Confidence: {:.2}%)",
            verdict.label,
            confidence * 100.0
        )),
        (_, Some(confidence)) => lines.push(format!(
            "Predicted Quality: {} (Confidence: {:.2}%)",
            verdict.label,
            confidence * 100.0
        )),
        _ => lines.push(format!("Predicted Quality: {}", verdict.label)),
    }

    lines.push(String::new());
    for metric in &report.evaluation.metrics {
        let flag = if metric.out_of_range {
            " [out of range]"
        } else {
            ""
        };
        lines.push(format!(
            "  {:<24} {:>10} {:<8} deviation {:+.3}{flag}",
            metric.label,
            metric.raw_value,
            metric.zone.label(),
            metric.deviation
        ));
    }

    lines.push(String::new());
    lines.push(report.summary.clone());
    for recommendation in &report.recommendations {
        lines.push(format!("- {}", recommendation.message));
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

pub(crate) fn render_metric_table(domain: Domain, definitions: &[MetricDefinition]) -> String {
    let mut lines = vec![format!("{} metrics", domain.label())];

    for definition in definitions {
        let ideal = match definition.ideal {
            Ideal::Value { value } => value.to_string(),
            Ideal::Band { min, max } => format!("{min}-{max}"),
        };
        let last = definition.zones.len().saturating_sub(1);
        let zones = definition
            .zones
            .iter()
            .enumerate()
            .map(|(index, zone)| {
                let close = if index == last || zone.is_point() { ']' } else { ')' };
                format!(
                    "[{}, {}{close} {}",
                    zone.min,
                    zone.max,
                    zone.classification.label()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "- {} ({}): range {}-{} {}, ideal {ideal}; {zones}",
            definition.label,
            definition.key,
            definition.valid_range.min,
            definition.valid_range.max,
            definition.unit.unwrap_or(""),
        ));
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use sample_quality::assessment::assess;
    use sample_quality::prediction::{PredictionResponse, PredictionValue};
    use sample_quality::quality::{metric_definitions, Sample};

    #[test]
    fn renders_verdict_and_recommendations() {
        let sample: Sample = [
            ("pH", 5.0),
            ("temperature", 50.0),
            ("colour", 240.0),
            ("taste", 0.0),
            ("odor", 1.0),
            ("fat", 1.0),
            ("turbidity", 1.0),
        ]
        .into_iter()
        .collect();
        let response = PredictionResponse::success(PredictionValue::Label("low".into()), 0.78);
        let assessment = assess(Domain::Milk, &sample, &response).expect("valid sample");

        let rendered = render_assessment(&assessment);

        assert!(rendered.starts_with("Predicted Quality: LOW (Confidence: 78.00%)"));
        assert_eq!(rendered.matches("\n- ").count(), 5);
        assert!(rendered.contains("Based on your milk sample analysis"));
    }

    #[test]
    fn renders_skipped_assessments() {
        let assessment = Assessment::Skipped {
            message: "model offline".into(),
        };
        assert_eq!(render_assessment(&assessment), "Prediction failed: model offline\n");
    }

    #[test]
    fn metric_table_lists_every_definition() {
        let definitions = metric_definitions(Domain::Wine);
        let table = render_metric_table(Domain::Wine, definitions);
        assert_eq!(table.lines().count(), definitions.len() + 1);
        assert!(table.contains("ideal 2-4"));
    }

    #[test]
    fn metric_table_closes_the_last_zone() {
        let table = render_metric_table(Domain::Milk, metric_definitions(Domain::Milk));
        assert!(table.contains("[3, 6.5) Poor, [6.5, 7) Good, [7, 9.5] Warning"));
        assert!(table.contains("[0, 1) Poor, [1, 1] Good"));
    }
}
