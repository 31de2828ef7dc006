use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 30;

/// Display labels for the measurement slots, in the order the predictor expects them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Mean Radius",
    "Mean Texture",
    "Mean Perimeter",
    "Mean Area",
    "Mean Smoothness",
    "Mean Compactness",
    "Mean Concavity",
    "Mean Concave Points",
    "Mean Symmetry",
    "Mean Fractal Dimension",
    "Radius Error",
    "Texture Error",
    "Perimeter Error",
    "Area Error",
    "Smoothness Error",
    "Compactness Error",
    "Concavity Error",
    "Concave Points Error",
    "Symmetry Error",
    "Fractal Dimension Error",
    "Worst Radius",
    "Worst Texture",
    "Worst Perimeter",
    "Worst Area",
    "Worst Smoothness",
    "Worst Compactness",
    "Worst Concavity",
    "Worst Concave Points",
    "Worst Symmetry",
    "Worst Fractal Dimension",
];

const BENIGN_SAMPLE: [f64; FEATURE_COUNT] = [
    13.54, 14.36, 87.46, 566.3, 0.09779, 0.08129, 0.06664, 0.04781, 0.1885, 0.05766, 0.2699,
    0.7886, 2.058, 23.56, 0.008462, 0.0146, 0.02387, 0.01315, 0.0198, 0.0023, 15.11, 19.26, 99.7,
    711.2, 0.144, 0.1773, 0.239, 0.1288, 0.2977, 0.07259,
];

const MALIGNANT_SAMPLE: [f64; FEATURE_COUNT] = [
    17.99, 10.38, 122.8, 1001.0, 0.1184, 0.2776, 0.3001, 0.1471, 0.2419, 0.07871, 1.095, 0.9053,
    8.589, 153.4, 0.006399, 0.04904, 0.05373, 0.01587, 0.03003, 0.006193, 25.38, 17.33, 184.6,
    2019.0, 0.1622, 0.6656, 0.7119, 0.2654, 0.4601, 0.1189,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExampleDataset {
    Benign,
    Malignant,
}

impl ExampleDataset {
    pub fn values(self) -> &'static [f64; FEATURE_COUNT] {
        match self {
            Self::Benign => &BENIGN_SAMPLE,
            Self::Malignant => &MALIGNANT_SAMPLE,
        }
    }
}

/// Presentation bucket for a predictor label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Danger,
}

impl Verdict {
    /// Labels carrying the benign marker ("İyi" or "benign") are safe, everything else is danger.
    pub fn from_label(label: &str) -> Self {
        if label.contains("İyi") || label.to_lowercase().contains("benign") {
            Self::Safe
        } else {
            Self::Danger
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
