//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{config::parse_endpoint, HttpPredictor, NetworkError, Predictor};
use crossbeam_channel::{Receiver, Sender};
use shared::protocol::PredictResponse;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::StartupConfig;

pub fn launch(startup: StartupConfig, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let endpoint = match parse_endpoint(&startup.predictor_url) {
                Ok(endpoint) => endpoint,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("{err:#}"),
                    )));
                    tracing::error!("backend worker not started: {err:#}");
                    return;
                }
            };

            tracing::info!(%endpoint, "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info(format!("Tahmin servisi: {endpoint}")));
            let predictor = Arc::new(HttpPredictor::new(endpoint));

            // Requests run as separate tasks; the form drops answers for superseded tickets.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Predict { ticket, request } => {
                        tracing::info!(ticket, "backend: predict");
                        let predictor = Arc::clone(&predictor);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let response = predictor.predict(&request).await;
                            if let Err(err) = &response {
                                tracing::error!(ticket, "backend: predict failed: {err}");
                            }
                            tokio::task::block_in_place(|| {
                                deliver_prediction(&ui_tx, ticket, response)
                            });
                        });
                    }
                }
            }
        });
    });
}

/// Blocks while the UI queue is full; the form stays loading until this lands.
pub(crate) fn deliver_prediction(
    ui_tx: &Sender<UiEvent>,
    ticket: u64,
    response: Result<PredictResponse, NetworkError>,
) {
    if let Err(err) = ui_tx.send(UiEvent::PredictionFinished { ticket, response }) {
        tracing::warn!(ticket, "ui closed before prediction result arrived: {err}");
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
