use serde::{Deserialize, Serialize};

use crate::domain::{Verdict, FEATURE_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f64>,
}

impl From<[f64; FEATURE_COUNT]> for PredictRequest {
    fn from(features: [f64; FEATURE_COUNT]) -> Self {
        Self {
            features: features.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: String,
    pub probability: f64,
}

impl PredictResponse {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_label(&self.prediction)
    }

    /// Probability as a percentage with two decimals, e.g. `%97.00`. Ties round up.
    pub fn probability_label(&self) -> String {
        let percent = (self.probability * 100.0 * 100.0).round() / 100.0;
        format!("%{percent:.2}")
    }

    pub fn has_valid_probability(&self) -> bool {
        self.probability.is_finite() && (0.0..=1.0).contains(&self.probability)
    }
}
