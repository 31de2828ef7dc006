//! Backend commands queued from UI to backend worker.

use shared::protocol::PredictRequest;

pub enum BackendCommand {
    Predict {
        ticket: u64,
        request: PredictRequest,
    },
}
