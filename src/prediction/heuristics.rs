use super::{PredictionResponse, PredictionValue, QualityPredictor};
use crate::quality::{Domain, ParsedSample, Sample};
use tracing::debug;

/// Rule-based stand-in for a trained model.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPredictor;

impl HeuristicPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl QualityPredictor for HeuristicPredictor {
    fn predict(&self, domain: Domain, sample: &Sample) -> PredictionResponse {
        let parsed = match ParsedSample::parse(domain, sample) {
            Ok(parsed) => parsed,
            Err(err) => return PredictionResponse::error(err.to_string()),
        };
        let reading = |key: &str| parsed.value(key).unwrap_or_default();

        let (prediction, confidence) = match domain {
            Domain::Milk => milk_quality(reading("pH"), reading("temperature")),
            Domain::Water => water_potability(reading("ph"), reading("turbidity")),
            Domain::Wine => wine_score(reading("alcohol"), reading("fixed_acidity")),
        };

        debug!(%domain, ?prediction, confidence, "heuristic prediction");
        PredictionResponse::success(prediction, confidence)
    }
}

fn milk_quality(ph: f64, temperature: f64) -> (PredictionValue, f64) {
    let (label, confidence) = if (6.5..=7.2).contains(&ph) && (2.0..=6.0).contains(&temperature) {
        ("high", 0.92)
    } else if (6.0..=7.5).contains(&ph) && (1.0..=8.0).contains(&temperature) {
        ("medium", 0.85)
    } else {
        ("low", 0.78)
    };
    (PredictionValue::Label(label.to_string()), confidence)
}

fn water_potability(ph: f64, turbidity: f64) -> (PredictionValue, f64) {
    if (6.5..=8.5).contains(&ph) && turbidity < 1.0 {
        (PredictionValue::Integer(1), 0.89)
    } else {
        (PredictionValue::Integer(0), 0.76)
    }
}

/// Score on a 0-10 scale, clamped to 3..=9.
fn wine_score(alcohol: f64, fixed_acidity: f64) -> (PredictionValue, f64) {
    let mut score: i64 = 5;

    if alcohol >= 12.0 {
        score += 2;
    } else if alcohol >= 10.0 {
        score += 1;
    }

    if (6.0..=8.0).contains(&fixed_acidity) {
        score += 1;
    } else if fixed_acidity > 10.0 || fixed_acidity < 5.0 {
        score -= 1;
    }

    (PredictionValue::Integer(score.clamp(3, 9)), 0.82)
}
