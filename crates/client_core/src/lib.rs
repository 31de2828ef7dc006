//! Client side of the tumor classification form: input state, validation,
//! and the request to the prediction service.

pub mod config;
pub mod error;
pub mod form;
pub mod predictor;

pub use config::{load_settings, PredictorSettings};
pub use error::{FeatureIndexError, NetworkError, ValidationError};
pub use form::{FeatureVector, FormController, SubmitOutcome, SubmitTicket};
pub use predictor::{HttpPredictor, Predictor};
