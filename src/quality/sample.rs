use super::catalog::metric_definitions;
use super::domain::{Domain, MetricDefinition};
use super::evaluation::EvaluationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A submitted field value: JSON number or the text an HTML form sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Finite numeric reading, if the value has one.
    pub fn parse_number(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(value) => *value,
            RawValue::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(value) => write!(f, "{value}"),
            RawValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Field name to raw value, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample(BTreeMap<String, RawValue>);

impl Sample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Sample
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Sample validated against a domain's definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSample {
    domain: Domain,
    values: Vec<(&'static MetricDefinition, f64)>,
}

impl ParsedSample {
    /// Missing keys are reported together; invalid values stop at the first
    /// offender in declaration order.
    pub fn parse(domain: Domain, sample: &Sample) -> Result<Self, EvaluationError> {
        let definitions = metric_definitions(domain);

        let missing: Vec<String> = definitions
            .iter()
            .filter(|definition| sample.get(definition.key).is_none())
            .map(|definition| definition.key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(EvaluationError::MissingFields { keys: missing });
        }

        let mut values = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let Some(raw) = sample.get(definition.key) else {
                continue;
            };
            let value = raw
                .parse_number()
                .filter(|value| {
                    !definition.direction.is_binary() || *value == 0.0 || *value == 1.0
                })
                .ok_or_else(|| EvaluationError::InvalidValue {
                    key: definition.key.to_string(),
                    raw_value: raw.to_string(),
                })?;
            values.push((definition, value));
        }

        Ok(Self { domain, values })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static MetricDefinition, f64)> + '_ {
        self.values.iter().copied()
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(definition, _)| definition.key == key)
            .map(|(_, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_values_are_trimmed_before_parsing() {
        assert_eq!(RawValue::from(" 6.8 ").parse_number(), Some(6.8));
        assert_eq!(RawValue::from("abc").parse_number(), None);
        assert_eq!(RawValue::from("NaN").parse_number(), None);
        assert_eq!(RawValue::Number(f64::INFINITY).parse_number(), None);
    }

    #[test]
    fn raw_values_deserialize_from_numbers_or_text() {
        let sample: Sample =
            serde_json::from_str(r#"{"pH": 6.8, "taste": "1"}"#).expect("valid json");
        assert_eq!(sample.get("pH"), Some(&RawValue::Number(6.8)));
        assert_eq!(sample.get("taste"), Some(&RawValue::Text("1".into())));
    }

    #[test]
    fn binary_metrics_reject_other_numbers() {
        let sample: Sample = [
            ("pH", 6.8),
            ("temperature", 37.0),
            ("colour", 253.0),
            ("taste", 0.5),
            ("odor", 1.0),
            ("fat", 1.0),
            ("turbidity", 0.0),
        ]
        .into_iter()
        .collect();

        let err = ParsedSample::parse(Domain::Milk, &sample).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::InvalidValue {
                key: "taste".into(),
                raw_value: "0.5".into(),
            }
        );
    }

    #[test]
    fn every_missing_key_is_reported_in_declaration_order() {
        let sample: Sample = [("pH", 6.8), ("taste", 1.0), ("extra", 3.0)]
            .into_iter()
            .collect();

        let err = ParsedSample::parse(Domain::Milk, &sample).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::MissingFields {
                keys: vec![
                    "temperature".into(),
                    "odor".into(),
                    "fat".into(),
                    "turbidity".into(),
                    "colour".into(),
                ],
            }
        );
    }
}
