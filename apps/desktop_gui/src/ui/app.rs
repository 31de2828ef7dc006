use std::time::Duration;

use client_core::{
    FormController, NetworkError, PredictorSettings, SubmitOutcome, SubmitTicket,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{ExampleDataset, FEATURE_NAMES};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::theme::{self, BoxPalette};

const GRID_COLUMNS: usize = 3;
const SUBMIT_LABEL: &str = "Tahmin Et";
const SUBMIT_LOADING_LABEL: &str = "Analiz Ediliyor...";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub predictor_url: String,
}

impl StartupConfig {
    pub fn from_settings(settings: PredictorSettings, predictor_url: Option<String>) -> Self {
        Self {
            predictor_url: predictor_url.unwrap_or(settings.predictor_url),
        }
    }
}

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Configuration",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

fn message_box(ui: &mut egui::Ui, palette: &BoxPalette, add: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(palette.fill)
        .stroke(egui::Stroke::new(1.0, palette.stroke))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui);
        });
}

pub struct PredictionApp {
    form: FormController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
    status_banner: Option<UiError>,
}

impl PredictionApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            form: FormController::new(),
            cmd_tx,
            ui_rx,
            status: "Backend worker starting...".to_string(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                    self.status_banner = None;
                }
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "ui error: {}", err.message());
                    self.status = format!("{} error: {}", err_label(err.category()), err.message());
                    self.status_banner = Some(err);
                }
                UiEvent::PredictionFinished { ticket, response } => {
                    if self.form.complete_submit(ticket, response) == SubmitOutcome::Superseded {
                        tracing::debug!(ticket, "ignored result for superseded submit");
                    }
                }
            }
        }
    }

    fn submit(&mut self) {
        let Ok(SubmitTicket { seq, request }) = self.form.begin_submit() else {
            return;
        };

        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Predict {
                ticket: seq,
                request,
            },
            &mut self.status,
        );
        if !queued {
            self.status_banner = Some(UiError::from_message(
                UiErrorContext::Submit,
                self.status.clone(),
            ));
            self.form
                .complete_submit(seq, Err(NetworkError::Transport(self.status.clone())));
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.heading("🩺 Meme Kanseri Sınıflandırma");
        ui.label("Hücre çekirdeği laboratuvar verilerini girerek model tahminini görüntüleyin.");
        ui.add_space(12.0);
    }

    fn show_example_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Örnek Doldur (İyi Huylu)").clicked() {
                self.form.fill_example(ExampleDataset::Benign);
            }
            if ui.button("Örnek Doldur (Kötü Huylu)").clicked() {
                self.form.fill_example(ExampleDataset::Malignant);
            }
            if ui.button("Temizle").clicked() {
                self.form.clear();
            }
        });
        ui.add_space(12.0);
    }

    fn show_feature_grid(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("feature_grid")
            .num_columns(GRID_COLUMNS * 2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for (index, name) in FEATURE_NAMES.iter().enumerate() {
                    ui.label(*name);
                    let mut value = self.form.feature(index).unwrap_or_default().to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut value)
                            .hint_text("0.00")
                            .desired_width(110.0),
                    );
                    if response.changed() {
                        if let Err(err) = self.form.set_feature(index, value) {
                            tracing::warn!("feature edit dropped: {err}");
                        }
                    }
                    if (index + 1) % GRID_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(12.0);
    }

    fn show_submit(&mut self, ui: &mut egui::Ui) {
        let loading = self.form.is_loading();
        let label = if loading {
            SUBMIT_LOADING_LABEL
        } else {
            SUBMIT_LABEL
        };
        let button = egui::Button::new(label).min_size(egui::vec2(160.0, 32.0));
        if ui.add_enabled(!loading, button).clicked() {
            self.submit();
        }
        ui.add_space(12.0);
    }

    fn show_outcome(&self, ui: &mut egui::Ui) {
        if let Some(message) = self.form.error_message() {
            message_box(ui, &theme::ERROR_BOX, |ui| {
                ui.colored_label(theme::ERROR_BOX.text, message);
            });
        }

        if let Some(result) = self.form.result() {
            let palette = theme::verdict_palette(result.verdict());
            message_box(ui, palette, |ui| {
                ui.heading(
                    egui::RichText::new(format!("Sonuç: {}", result.prediction))
                        .color(palette.text),
                );
                ui.horizontal(|ui| {
                    ui.label("Olasılık Skoru:");
                    ui.label(
                        egui::RichText::new(result.probability_label())
                            .strong()
                            .color(palette.text),
                    );
                });
            });
        }
    }

    fn show_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| match &self.status_banner {
            Some(err) => {
                ui.colored_label(theme::ERROR_BOX.text, &self.status);
                if err.context() == UiErrorContext::BackendStartup {
                    ui.label("(check --predictor-url / PREDICTOR_URL and restart)");
                }
            }
            None => {
                ui.weak(&self.status);
            }
        });
    }
}

impl eframe::App for PredictionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| self.show_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.show_header(ui);
                    self.show_example_buttons(ui);
                    self.show_feature_grid(ui);
                    self.show_submit(ui);
                    self.show_outcome(ui);
                });
        });

        if self.form.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
