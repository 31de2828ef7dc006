use serde::{Deserialize, Serialize};

/// Error body returned by the predictor service on non-2xx responses.
///
/// `detail` is a plain string for handled failures and a list of field
/// errors when request validation fails, so it stays untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ServiceErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}
