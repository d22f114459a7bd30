use super::evaluation::EvaluationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sample families the engine knows how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Milk,
    Water,
    Wine,
}

impl Domain {
    pub const fn ordered() -> [Self; 3] {
        [Self::Milk, Self::Water, Self::Wine]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Milk => "milk",
            Self::Water => "water",
            Self::Wine => "wine",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Milk => "Milk",
            Self::Water => "Water",
            Self::Wine => "Wine",
        }
    }

    /// Phrase used when every metric of a sample lands in a good zone.
    pub const fn standard_phrase(self) -> &'static str {
        match self {
            Self::Milk | Self::Wine => "high-quality standards",
            Self::Water => "potability standards",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = EvaluationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "milk" => Ok(Self::Milk),
            "water" => Ok(Self::Water),
            "wine" => Ok(Self::Wine),
            _ => Err(EvaluationError::UnknownDomain(raw.to_string())),
        }
    }
}

/// Quality band a raw value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Good,
    Warning,
    Poor,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Poor => "Poor",
        }
    }
}

/// Governs the sign of the deviation and the phrasing of advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    HigherBetter,
    LowerBetter,
    TargetValue,
    BinaryGoodIsOne,
    BinaryGoodIsZero,
}

impl Direction {
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::BinaryGoodIsOne | Self::BinaryGoodIsZero)
    }

    /// Lower raw values are preferable, so the raw offset is negated.
    pub const fn is_inverted(self) -> bool {
        matches!(self, Self::LowerBetter | Self::BinaryGoodIsZero)
    }

    /// Recovers which side of the ideal a direction-normalized deviation sits on.
    pub fn position(self, deviation: f64) -> IdealPosition {
        if deviation == 0.0 {
            return IdealPosition::AtIdeal;
        }

        let above = (deviation > 0.0) != self.is_inverted();
        if above {
            IdealPosition::Above
        } else {
            IdealPosition::Below
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdealPosition {
    Below,
    AtIdeal,
    Above,
}

/// Closed numeric interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Sub-range of a metric's valid range with a fixed classification.
///
/// Neighbouring zones share their boundary value; `MetricDefinition::resolve_zone`
/// decides which side owns it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zone {
    pub min: f64,
    pub max: f64,
    pub classification: Classification,
}

impl Zone {
    pub const fn new(min: f64, max: f64, classification: Classification) -> Self {
        Self {
            min,
            max,
            classification,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_point(&self) -> bool {
        self.min == self.max
    }
}

/// Ideal value, or a band in which every value is equally good.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ideal {
    Value { value: f64 },
    Band { min: f64, max: f64 },
}

impl Ideal {
    /// Single point used for markers and threshold defaults.
    pub fn marker(&self) -> f64 {
        match *self {
            Self::Value { value } => value,
            Self::Band { min, max } => (min + max) / 2.0,
        }
    }

    /// Signed `raw - ideal`; zero anywhere inside a band.
    pub fn offset(&self, raw: f64) -> f64 {
        match *self {
            Self::Value { value } => raw - value,
            Self::Band { min, .. } if raw < min => raw - min,
            Self::Band { max, .. } if raw > max => raw - max,
            Self::Band { .. } => 0.0,
        }
    }
}

/// Canned advice fragments for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Advice {
    pub guidance: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub below: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub above: Option<&'static str>,
}

impl Advice {
    pub fn hint(&self, position: IdealPosition) -> Option<&'static str> {
        match position {
            IdealPosition::Below => self.below,
            IdealPosition::Above => self.above,
            IdealPosition::AtIdeal => None,
        }
    }
}

/// Static description of one measurable field in a domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub valid_range: ValueRange,
    pub ideal: Ideal,
    pub zones: &'static [Zone],
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    pub advice: Advice,
}

/// Where a raw value landed relative to a metric's zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZonePlacement {
    pub classification: Classification,
    pub out_of_range: bool,
}

impl MetricDefinition {
    /// Zone owning `value` once clamped into `valid_range`.
    ///
    /// A point zone owns its value outright. A boundary shared with a good zone
    /// belongs to the good zone; any other boundary belongs to the lower zone.
    pub fn resolve_zone(&self, value: f64) -> Option<&'static Zone> {
        let clamped = self.valid_range.clamp(value);

        if let Some(point) = self
            .zones
            .iter()
            .find(|zone| zone.is_point() && zone.min == clamped)
        {
            return Some(point);
        }

        let mut candidates = self.zones.iter().filter(|zone| zone.contains(clamped));
        let lowest = candidates.next()?;
        if lowest.classification == Classification::Good {
            return Some(lowest);
        }
        candidates
            .find(|zone| zone.classification == Classification::Good)
            .or(Some(lowest))
    }

    /// Values outside `valid_range` are classified by the nearest edge zone.
    pub fn classify(&self, value: f64) -> ZonePlacement {
        let classification = self
            .resolve_zone(value)
            .map(|zone| zone.classification)
            .unwrap_or(Classification::Poor);

        ZonePlacement {
            classification,
            out_of_range: !self.valid_range.contains(value),
        }
    }

    /// Positive deviation always means "better than ideal" (or above it, for
    /// target-value metrics).
    pub fn deviation(&self, value: f64) -> f64 {
        let offset = self.ideal.offset(value);
        if offset == 0.0 {
            0.0
        } else if self.direction.is_inverted() {
            -offset
        } else {
            offset
        }
    }

    /// Threshold for severity buckets; 10% of the ideal magnitude unless tuned.
    pub fn severity_threshold(&self) -> f64 {
        if let Some(threshold) = self.threshold {
            return threshold;
        }

        let magnitude = self.ideal.marker().abs();
        if magnitude > 0.0 {
            magnitude * 0.1
        } else {
            self.valid_range.span() * 0.1
        }
    }

    /// Whether the zones tile `valid_range` exactly, in order, without overlap.
    pub fn zones_partition_range(&self) -> bool {
        let (Some(first), Some(last)) = (self.zones.first(), self.zones.last()) else {
            return false;
        };

        if first.min != self.valid_range.min || last.max != self.valid_range.max {
            return false;
        }

        let contiguous = self
            .zones
            .windows(2)
            .all(|pair| matches!(pair, [lower, upper] if lower.max == upper.min));
        let widths_valid = self
            .zones
            .iter()
            .enumerate()
            .all(|(index, zone)| zone.min < zone.max || (index + 1 == self.zones.len() && zone.min == zone.max));

        contiguous && widths_valid
    }

    pub fn display_value(&self, value: f64) -> String {
        match self.unit {
            Some(unit) if unit.starts_with('°') || unit.starts_with('%') => {
                format!("{value}{unit}")
            }
            Some(unit) => format!("{value} {unit}"),
            None => value.to_string(),
        }
    }
}
