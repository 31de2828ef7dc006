use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::config::{load_settings, load_settings_from};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{PredictionApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Breast cancer classification form")]
struct Args {
    /// Prediction endpoint; overrides predictor.toml and PREDICTOR_URL.
    #[arg(long)]
    predictor_url: Option<String>,
    /// Settings file to read instead of ./predictor.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };
    let startup = StartupConfig::from_settings(settings, args.predictor_url);
    tracing::info!(predictor_url = %startup.predictor_url, "starting desktop form");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(startup, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Meme Kanseri Sınıflandırma")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Meme Kanseri Sınıflandırma",
        options,
        Box::new(|_cc| Ok(Box::new(PredictionApp::new(cmd_tx, ui_rx)))),
    )
}

#[cfg(test)]
mod tests {
    use super::Args;
    use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext};
    use clap::Parser;

    #[test]
    fn parses_predictor_override_flags() {
        let args = Args::parse_from([
            "desktop_gui",
            "--predictor-url",
            "http://127.0.0.1:9000/predict/",
            "--config",
            "custom.toml",
        ]);
        assert_eq!(
            args.predictor_url.as_deref(),
            Some("http://127.0.0.1:9000/predict/")
        );
        assert_eq!(
            args.config.as_deref(),
            Some(std::path::Path::new("custom.toml"))
        );
    }

    #[test]
    fn classifies_backend_disconnect_as_transport_error() {
        let err = UiError::from_message(
            UiErrorContext::Submit,
            "Backend worker disconnected (possible startup/runtime failure)",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::Submit);
    }

    #[test]
    fn classifies_bad_endpoint_as_validation_error() {
        let err = UiError::from_message(
            UiErrorContext::BackendStartup,
            "unsupported predictor url scheme 'ftp' in 'ftp://host/predict/'",
        );
        assert_eq!(err.category(), UiErrorCategory::Validation);
    }
}
