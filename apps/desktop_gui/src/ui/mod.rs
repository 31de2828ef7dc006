//! UI layer for the desktop form: app shell and color palette.

pub mod app;
pub mod theme;

pub use app::{PredictionApp, StartupConfig};
