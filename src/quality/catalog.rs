//! Static metric tables for each supported domain.
//!
//! Field order in each table is the order in which evaluations, recommendations
//! and chart specs are reported.

use super::domain::{
    Advice, Classification, Direction, Domain, Ideal, MetricDefinition, ValueRange, Zone,
};

use Classification::{Good, Poor, Warning};

const fn zone(min: f64, max: f64, classification: Classification) -> Zone {
    Zone::new(min, max, classification)
}

const fn advice(
    guidance: &'static str,
    below: Option<&'static str>,
    above: Option<&'static str>,
) -> Advice {
    Advice {
        guidance,
        below,
        above,
    }
}

const BINARY_GOOD_IS_ONE: &[Zone] = &[zone(0.0, 1.0, Poor), zone(1.0, 1.0, Good)];
const BINARY_GOOD_IS_ZERO: &[Zone] = &[zone(0.0, 1.0, Good), zone(1.0, 1.0, Poor)];

const MILK: &[MetricDefinition] = &[
    MetricDefinition {
        key: "pH",
        label: "pH Level",
        valid_range: ValueRange::new(3.0, 9.5),
        ideal: Ideal::Value { value: 6.8 },
        zones: &[zone(3.0, 6.5, Poor), zone(6.5, 7.0, Good), zone(7.0, 9.5, Warning)],
        direction: Direction::TargetValue,
        unit: None,
        threshold: None,
        advice: advice(
            "Optimal pH for high-quality milk is between 6.5-7.0.",
            Some("Your sample is too acidic."),
            Some("Your sample is too alkaline."),
        ),
    },
    MetricDefinition {
        key: "temperature",
        label: "Temperature",
        valid_range: ValueRange::new(34.0, 90.0),
        ideal: Ideal::Value { value: 37.0 },
        zones: &[zone(34.0, 40.0, Good), zone(40.0, 60.0, Warning), zone(60.0, 90.0, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("°C"),
        threshold: None,
        advice: advice(
            "High-quality milk should be stored at temperatures below 40°C.",
            None,
            Some("Consider cooling your milk sample."),
        ),
    },
    MetricDefinition {
        key: "taste",
        label: "Taste",
        valid_range: ValueRange::new(0.0, 1.0),
        ideal: Ideal::Value { value: 1.0 },
        zones: BINARY_GOOD_IS_ONE,
        direction: Direction::BinaryGoodIsOne,
        unit: None,
        threshold: None,
        advice: advice(
            "Poor taste indicates potential spoilage or contamination. Check for freshness and proper storage conditions.",
            None,
            None,
        ),
    },
    MetricDefinition {
        key: "odor",
        label: "Odor",
        valid_range: ValueRange::new(0.0, 1.0),
        ideal: Ideal::Value { value: 1.0 },
        zones: BINARY_GOOD_IS_ONE,
        direction: Direction::BinaryGoodIsOne,
        unit: None,
        threshold: None,
        advice: advice(
            "Unpleasant odor suggests bacterial growth or chemical contamination. Ensure proper hygiene during collection and storage.",
            None,
            None,
        ),
    },
    MetricDefinition {
        key: "fat",
        label: "Fat Content",
        valid_range: ValueRange::new(0.0, 1.0),
        ideal: Ideal::Value { value: 1.0 },
        zones: BINARY_GOOD_IS_ONE,
        direction: Direction::BinaryGoodIsOne,
        unit: None,
        threshold: None,
        advice: advice(
            "Low fat content may indicate dilution or poor nutrition of the source animal. Check feeding practices or potential adulteration.",
            None,
            None,
        ),
    },
    MetricDefinition {
        key: "turbidity",
        label: "Turbidity",
        valid_range: ValueRange::new(0.0, 1.0),
        ideal: Ideal::Value { value: 0.0 },
        zones: BINARY_GOOD_IS_ZERO,
        direction: Direction::BinaryGoodIsZero,
        unit: None,
        threshold: None,
        advice: advice(
            "High turbidity suggests presence of impurities. Improve filtration and handling procedures.",
            None,
            None,
        ),
    },
    MetricDefinition {
        key: "colour",
        label: "Color",
        valid_range: ValueRange::new(240.0, 255.0),
        ideal: Ideal::Value { value: 253.0 },
        zones: &[zone(240.0, 245.0, Poor), zone(245.0, 250.0, Warning), zone(250.0, 255.0, Good)],
        direction: Direction::HigherBetter,
        unit: None,
        threshold: None,
        advice: advice(
            "Optimal color value for high-quality milk is closer to 255.",
            Some("Lower values may indicate contamination or spoilage."),
            None,
        ),
    },
];

const WATER: &[MetricDefinition] = &[
    MetricDefinition {
        key: "ph",
        label: "pH Level",
        valid_range: ValueRange::new(0.0, 14.0),
        ideal: Ideal::Value { value: 7.0 },
        zones: &[zone(0.0, 6.5, Poor), zone(6.5, 8.5, Good), zone(8.5, 14.0, Warning)],
        direction: Direction::TargetValue,
        unit: None,
        threshold: None,
        advice: advice(
            "Optimal pH for potable water is between 6.5-8.5.",
            Some("Your sample is too acidic."),
            Some("Your sample is too alkaline."),
        ),
    },
    MetricDefinition {
        key: "hardness",
        label: "Hardness",
        valid_range: ValueRange::new(0.0, 500.0),
        ideal: Ideal::Value { value: 150.0 },
        zones: &[zone(0.0, 300.0, Good), zone(300.0, 400.0, Warning), zone(400.0, 500.0, Poor)],
        direction: Direction::TargetValue,
        unit: Some("mg/L"),
        threshold: None,
        advice: advice(
            "Hardness below 300 mg/L is generally acceptable for drinking water.",
            None,
            Some("Consider water softening through ion exchange."),
        ),
    },
    MetricDefinition {
        key: "solids",
        label: "Total Dissolved Solids",
        valid_range: ValueRange::new(0.0, 60000.0),
        ideal: Ideal::Value { value: 500.0 },
        zones: &[zone(0.0, 500.0, Good), zone(500.0, 1500.0, Warning), zone(1500.0, 60000.0, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("ppm"),
        threshold: None,
        advice: advice(
            "High TDS levels can affect taste and indicate contamination.",
            None,
            Some("Consider reverse osmosis or distillation."),
        ),
    },
    MetricDefinition {
        key: "chloramines",
        label: "Chloramines",
        valid_range: ValueRange::new(0.0, 15.0),
        ideal: Ideal::Value { value: 4.0 },
        zones: &[zone(0.0, 4.0, Good), zone(4.0, 15.0, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("ppm"),
        threshold: None,
        advice: advice(
            "Levels above 4 ppm may cause health issues.",
            None,
            Some("Consider activated carbon filtration."),
        ),
    },
    MetricDefinition {
        key: "sulfate",
        label: "Sulfate",
        valid_range: ValueRange::new(0.0, 500.0),
        ideal: Ideal::Value { value: 250.0 },
        zones: &[zone(0.0, 250.0, Good), zone(250.0, 500.0, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("mg/L"),
        threshold: None,
        advice: advice(
            "High sulfate can cause a bitter taste and laxative effects.",
            None,
            Some("Consider ion exchange or reverse osmosis."),
        ),
    },
    MetricDefinition {
        key: "conductivity",
        label: "Conductivity",
        valid_range: ValueRange::new(0.0, 1000.0),
        ideal: Ideal::Value { value: 800.0 },
        zones: &[zone(0.0, 800.0, Good), zone(800.0, 1000.0, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("μS/cm"),
        threshold: None,
        advice: advice(
            "High conductivity indicates elevated mineral content.",
            None,
            Some("Consider demineralization treatments."),
        ),
    },
    MetricDefinition {
        key: "organic_carbon",
        label: "Organic Carbon",
        valid_range: ValueRange::new(0.0, 30.0),
        ideal: Ideal::Value { value: 2.0 },
        zones: &[zone(0.0, 2.0, Good), zone(2.0, 30.0, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("ppm"),
        threshold: None,
        advice: advice(
            "Elevated levels may support microbial growth.",
            None,
            Some("Consider activated carbon filtration or advanced oxidation."),
        ),
    },
    MetricDefinition {
        key: "trihalomethanes",
        label: "Trihalomethanes",
        valid_range: ValueRange::new(0.0, 150.0),
        ideal: Ideal::Value { value: 80.0 },
        zones: &[zone(0.0, 80.0, Good), zone(80.0, 150.0, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("μg/L"),
        threshold: None,
        advice: advice(
            "Levels above 80 μg/L exceed regulatory limits.",
            None,
            Some("Consider activated carbon filtration or aeration."),
        ),
    },
    MetricDefinition {
        key: "turbidity",
        label: "Turbidity",
        valid_range: ValueRange::new(0.0, 10.0),
        ideal: Ideal::Value { value: 1.0 },
        zones: &[zone(0.0, 1.0, Good), zone(1.0, 5.0, Warning), zone(5.0, 10.0, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("NTU"),
        threshold: None,
        advice: advice(
            "For drinking water, turbidity should be below 1 NTU.",
            None,
            Some("Consider filtration or clarification methods."),
        ),
    },
];

const WINE: &[MetricDefinition] = &[
    MetricDefinition {
        key: "fixed_acidity",
        label: "Fixed Acidity",
        valid_range: ValueRange::new(3.0, 15.0),
        ideal: Ideal::Value { value: 7.5 },
        zones: &[zone(3.0, 6.0, Poor), zone(6.0, 9.0, Good), zone(9.0, 15.0, Warning)],
        direction: Direction::TargetValue,
        unit: Some("g/L"),
        threshold: None,
        advice: advice(
            "Optimal fixed acidity for quality wine is between 6-9 g/L.",
            Some("Consider adding tartaric acid during production."),
            Some("Consider reducing acidity through malolactic fermentation."),
        ),
    },
    MetricDefinition {
        key: "volatile_acidity",
        label: "Volatile Acidity",
        valid_range: ValueRange::new(0.0, 1.5),
        ideal: Ideal::Value { value: 0.4 },
        zones: &[zone(0.0, 0.5, Good), zone(0.5, 0.7, Warning), zone(0.7, 1.5, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("g/L"),
        threshold: None,
        advice: advice(
            "High volatile acidity can give wine a vinegar taste.",
            None,
            Some("Keep below 0.5 g/L by ensuring proper sanitation during fermentation and limiting oxygen exposure."),
        ),
    },
    MetricDefinition {
        key: "citric_acid",
        label: "Citric Acid",
        valid_range: ValueRange::new(0.0, 1.0),
        ideal: Ideal::Value { value: 0.5 },
        zones: &[zone(0.0, 0.2, Poor), zone(0.2, 1.0, Good)],
        direction: Direction::HigherBetter,
        unit: Some("g/L"),
        threshold: None,
        advice: advice(
            "Citric acid adds freshness to wine and is typically kept above 0.2 g/L.",
            Some("Consider a small citric acid addition before bottling."),
            None,
        ),
    },
    MetricDefinition {
        key: "residual_sugar",
        label: "Residual Sugar",
        valid_range: ValueRange::new(0.0, 20.0),
        ideal: Ideal::Band { min: 2.0, max: 4.0 },
        zones: &[zone(0.0, 10.0, Good), zone(10.0, 15.0, Warning), zone(15.0, 20.0, Poor)],
        direction: Direction::TargetValue,
        unit: Some("g/L"),
        threshold: None,
        advice: advice(
            "High residual sugar may mask other flavors.",
            None,
            Some("For dry wines, aim for 2-4 g/L by allowing complete fermentation."),
        ),
    },
    MetricDefinition {
        key: "chlorides",
        label: "Chlorides",
        valid_range: ValueRange::new(0.0, 0.5),
        ideal: Ideal::Value { value: 0.05 },
        zones: &[zone(0.0, 0.1, Good), zone(0.1, 0.2, Warning), zone(0.2, 0.5, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("g/L"),
        threshold: None,
        advice: advice(
            "High chloride levels can make wine taste salty.",
            None,
            Some("Aim for levels below 0.1 g/L by using quality water and careful grape selection."),
        ),
    },
    MetricDefinition {
        key: "free_sulfur_dioxide",
        label: "Free Sulfur Dioxide",
        valid_range: ValueRange::new(0.0, 100.0),
        ideal: Ideal::Value { value: 30.0 },
        zones: &[zone(0.0, 10.0, Poor), zone(10.0, 60.0, Good), zone(60.0, 100.0, Warning)],
        direction: Direction::TargetValue,
        unit: Some("mg/L"),
        threshold: None,
        advice: advice(
            "Free SO₂ between 10-60 mg/L protects wine from oxidation and microbes.",
            Some("Consider a measured sulfite addition."),
            Some("Reduce sulfite additions or allow free SO₂ to dissipate before bottling."),
        ),
    },
    MetricDefinition {
        key: "total_sulfur_dioxide",
        label: "Total Sulfur Dioxide",
        valid_range: ValueRange::new(0.0, 300.0),
        ideal: Ideal::Value { value: 100.0 },
        zones: &[zone(0.0, 50.0, Poor), zone(50.0, 150.0, Good), zone(150.0, 300.0, Warning)],
        direction: Direction::TargetValue,
        unit: Some("mg/L"),
        threshold: None,
        advice: advice(
            "High SO₂ levels can affect aroma and taste.",
            Some("Low SO₂ leaves wine exposed to oxidation and spoilage."),
            Some("Keep below 150 mg/L while ensuring adequate preservation."),
        ),
    },
    MetricDefinition {
        key: "density",
        label: "Density",
        valid_range: ValueRange::new(0.9, 1.1),
        ideal: Ideal::Value { value: 0.995 },
        zones: &[zone(0.9, 1.0, Good), zone(1.0, 1.1, Poor)],
        direction: Direction::LowerBetter,
        unit: Some("g/cm³"),
        threshold: Some(0.002),
        advice: advice(
            "Lower density generally reflects a drier, fully fermented wine.",
            None,
            Some("Consider allowing fermentation to run to completion."),
        ),
    },
    MetricDefinition {
        key: "ph",
        label: "pH",
        valid_range: ValueRange::new(2.5, 4.5),
        ideal: Ideal::Value { value: 3.3 },
        zones: &[zone(2.5, 3.0, Poor), zone(3.0, 3.6, Good), zone(3.6, 4.5, Poor)],
        direction: Direction::TargetValue,
        unit: None,
        threshold: Some(0.3),
        advice: advice(
            "Optimal pH for quality wine is between 3.0-3.6.",
            Some("Consider malolactic fermentation to reduce acidity."),
            Some("Consider adding tartaric acid to increase acidity."),
        ),
    },
    MetricDefinition {
        key: "sulphates",
        label: "Sulphates",
        valid_range: ValueRange::new(0.0, 2.0),
        ideal: Ideal::Value { value: 0.8 },
        zones: &[zone(0.0, 0.6, Poor), zone(0.6, 1.2, Good), zone(1.2, 2.0, Warning)],
        direction: Direction::TargetValue,
        unit: Some("g/L"),
        threshold: None,
        advice: advice(
            "Adequate sulphates (0.6-0.8 g/L) help preserve wine and prevent oxidation.",
            Some("Consider adding potassium metabisulfite during production."),
            Some("Excess sulphates can leave a harsh finish; reduce sulfite additions."),
        ),
    },
    MetricDefinition {
        key: "alcohol",
        label: "Alcohol Content",
        valid_range: ValueRange::new(8.0, 15.0),
        ideal: Ideal::Value { value: 12.0 },
        zones: &[zone(8.0, 10.0, Poor), zone(10.0, 12.0, Warning), zone(12.0, 15.0, Good)],
        direction: Direction::HigherBetter,
        unit: Some("% vol."),
        threshold: None,
        advice: advice(
            "Higher alcohol content (11-13%) is often associated with better quality wines.",
            Some("Consider longer fermentation or using grapes with higher sugar content."),
            None,
        ),
    },
];

/// Metric table for a domain, in declaration order.
pub fn metric_definitions(domain: Domain) -> &'static [MetricDefinition] {
    match domain {
        Domain::Milk => MILK,
        Domain::Water => WATER,
        Domain::Wine => WINE,
    }
}

pub fn find_metric(domain: Domain, key: &str) -> Option<&'static MetricDefinition> {
    metric_definitions(domain)
        .iter()
        .find(|definition| definition.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milk_keys_follow_form_order() {
        let keys: Vec<_> = metric_definitions(Domain::Milk)
            .iter()
            .map(|definition| definition.key)
            .collect();
        assert_eq!(
            keys,
            ["pH", "temperature", "taste", "odor", "fat", "turbidity", "colour"]
        );
    }

    #[test]
    fn wine_tables_carry_tuned_thresholds() {
        let density = find_metric(Domain::Wine, "density").expect("density defined");
        assert_eq!(density.severity_threshold(), 0.002);

        let ph = find_metric(Domain::Wine, "ph").expect("ph defined");
        assert_eq!(ph.severity_threshold(), 0.3);
    }

    #[test]
    fn binary_metrics_classify_both_values() {
        let taste = find_metric(Domain::Milk, "taste").expect("taste defined");
        assert_eq!(taste.classify(1.0).classification, Good);
        assert_eq!(taste.classify(0.0).classification, Poor);

        let turbidity = find_metric(Domain::Milk, "turbidity").expect("turbidity defined");
        assert_eq!(turbidity.classify(0.0).classification, Good);
        assert_eq!(turbidity.classify(1.0).classification, Poor);
    }

    #[test]
    fn lookups_miss_unknown_keys() {
        assert!(find_metric(Domain::Water, "pH").is_none());
    }
}
