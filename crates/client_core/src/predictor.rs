use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ServiceErrorBody,
    protocol::{PredictRequest, PredictResponse},
};
use tracing::{debug, warn};
use url::Url;

use crate::{config::PredictorSettings, error::NetworkError};

#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, NetworkError>;
}

/// JSON-over-HTTP client for the prediction service. One attempt per call.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    http: Client,
    endpoint: Url,
}

impl HttpPredictor {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn from_settings(settings: &PredictorSettings) -> anyhow::Result<Self> {
        Ok(Self::new(settings.endpoint()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, NetworkError> {
        debug!(endpoint = %self.endpoint, "posting features to predictor");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| NetworkError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ServiceErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail_text());
            warn!(
                status = status.as_u16(),
                detail = detail.as_deref().unwrap_or(""),
                "predictor rejected request"
            );
            return Err(NetworkError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|err| NetworkError::Decode(err.to_string()))?;
        if !body.has_valid_probability() {
            return Err(NetworkError::Decode(format!(
                "probability {} outside [0, 1]",
                body.probability
            )));
        }
        Ok(body)
    }
}

#[cfg(test)]
#[path = "tests/predictor_tests.rs"]
mod tests;
