//! Form state for the 30 measurement inputs and the submit lifecycle.
//!
//! A submit moves `Idle -> Validating -> Requesting -> Idle`, or straight back
//! to `Idle` when validation fails. Every accepted submit gets a ticket number;
//! only a completion carrying the latest ticket may touch the displayed state.

use shared::{
    domain::{ExampleDataset, FEATURE_COUNT},
    protocol::{PredictRequest, PredictResponse},
};
use tracing::{debug, info, warn};

use crate::{
    error::{FeatureIndexError, NetworkError, ValidationError},
    predictor::Predictor,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    entries: [String; FEATURE_COUNT],
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            entries: std::array::from_fn(|_| String::new()),
        }
    }
}

impl FeatureVector {
    pub fn from_dataset(dataset: ExampleDataset) -> Self {
        let values = dataset.values();
        Self {
            entries: std::array::from_fn(|index| values[index].to_string()),
        }
    }

    pub fn entries(&self) -> &[String; FEATURE_COUNT] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<(), FeatureIndexError> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(FeatureIndexError { index })?;
        *slot = value.into();
        Ok(())
    }

    /// Completeness is checked across all entries before any entry is parsed.
    pub fn parse(&self) -> Result<[f64; FEATURE_COUNT], ValidationError> {
        if let Some(index) = self.entries.iter().position(|raw| raw.trim().is_empty()) {
            return Err(ValidationError::Incomplete { index });
        }

        let mut values = [0.0; FEATURE_COUNT];
        for (index, (slot, raw)) in values.iter_mut().zip(&self.entries).enumerate() {
            *slot = parse_feature(raw).ok_or_else(|| ValidationError::NonNumeric {
                index,
                value: raw.clone(),
            })?;
        }
        Ok(values)
    }
}

// JSON has no representation for inf/NaN.
fn parse_feature(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub seq: u64,
    pub request: PredictRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Succeeded,
    Failed(NetworkError),
    /// A newer submit was started before this one resolved; state was left alone.
    Superseded,
}

#[derive(Debug, Default)]
pub struct FormController {
    features: FeatureVector,
    result: Option<PredictResponse>,
    error: Option<String>,
    loading: bool,
    latest_ticket: u64,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    pub fn feature(&self, index: usize) -> Option<&str> {
        self.features.get(index)
    }

    pub fn result(&self) -> Option<&PredictResponse> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn fill_example(&mut self, dataset: ExampleDataset) {
        debug!(?dataset, "filling form with example dataset");
        self.features = FeatureVector::from_dataset(dataset);
        self.error = None;
        self.result = None;
    }

    /// Empties every input. The last result or error stays on screen.
    pub fn clear(&mut self) {
        self.features = FeatureVector::default();
    }

    pub fn set_feature(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), FeatureIndexError> {
        self.features.set(index, value)
    }

    /// Validates the inputs and, when they pass, marks the form as loading and
    /// hands back the request to send. Any request still in flight is superseded.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, ValidationError> {
        self.latest_ticket += 1;
        self.error = None;
        self.result = None;

        match self.features.parse() {
            Ok(values) => {
                self.loading = true;
                info!(ticket = self.latest_ticket, "submitting features to predictor");
                Ok(SubmitTicket {
                    seq: self.latest_ticket,
                    request: PredictRequest::from(values),
                })
            }
            Err(err) => {
                warn!(index = err.index(), "rejected submit: {err}");
                self.loading = false;
                self.error = Some(err.user_message().to_string());
                Err(err)
            }
        }
    }

    pub fn complete_submit(
        &mut self,
        ticket: u64,
        response: Result<PredictResponse, NetworkError>,
    ) -> SubmitOutcome {
        if ticket != self.latest_ticket || !self.loading {
            debug!(
                ticket,
                latest = self.latest_ticket,
                "dropping response for superseded submit"
            );
            return SubmitOutcome::Superseded;
        }

        self.loading = false;
        match response {
            Ok(response) => {
                info!(
                    ticket,
                    prediction = %response.prediction,
                    probability = response.probability,
                    "prediction received"
                );
                self.error = None;
                self.result = Some(response);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                warn!(ticket, "prediction failed: {err}");
                self.result = None;
                self.error = Some(err.user_message().to_string());
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub async fn submit<P>(&mut self, predictor: &P) -> SubmitOutcome
    where
        P: Predictor + ?Sized,
    {
        let ticket = match self.begin_submit() {
            Ok(ticket) => ticket,
            Err(err) => return SubmitOutcome::Invalid(err),
        };

        let in_flight = InFlight {
            form: self,
            ticket: ticket.seq,
        };
        let response = predictor.predict(&ticket.request).await;
        in_flight.form.complete_submit(ticket.seq, response)
    }
}

/// Clears the loading flag if the submit future is dropped mid-request.
struct InFlight<'a> {
    form: &'a mut FormController,
    ticket: u64,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.form.latest_ticket == self.ticket {
            self.form.loading = false;
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
