use shared::domain::{FEATURE_COUNT, FEATURE_NAMES};
use thiserror::Error;

pub const INCOMPLETE_INPUT_MESSAGE: &str = "Lütfen tüm 30 değeri de eksiksiz giriniz.";
pub const NON_NUMERIC_INPUT_MESSAGE: &str = "Lütfen sadece geçerli sayılar giriniz.";
pub const PREDICTOR_UNREACHABLE_MESSAGE: &str =
    "Sunucuya bağlanılamadı. Tahmin servisinin çalıştığından emin olun.";

fn feature_label(index: &usize) -> &'static str {
    FEATURE_NAMES.get(*index).copied().unwrap_or("unknown feature")
}

/// Local input problems caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("incomplete input: feature {index} ({}) is empty", feature_label(.index))]
    Incomplete { index: usize },
    #[error("non-numeric input: feature {index} ({}) = {value:?}", feature_label(.index))]
    NonNumeric { index: usize, value: String },
}

impl ValidationError {
    pub fn index(&self) -> usize {
        match self {
            Self::Incomplete { index } | Self::NonNumeric { index, .. } => *index,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Incomplete { .. } => INCOMPLETE_INPUT_MESSAGE,
            Self::NonNumeric { .. } => NON_NUMERIC_INPUT_MESSAGE,
        }
    }
}

/// Anything that went wrong between issuing the request and decoding the answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("predictor transport failure: {0}")]
    Transport(String),
    #[error("predictor returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("invalid predictor response payload: {0}")]
    Decode(String),
}

impl NetworkError {
    /// Every network failure collapses into the same message in the form.
    pub fn user_message(&self) -> &'static str {
        PREDICTOR_UNREACHABLE_MESSAGE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("feature index {index} out of range (expected < {})", FEATURE_COUNT)]
pub struct FeatureIndexError {
    pub index: usize,
}
