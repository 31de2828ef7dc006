//! Background worker that talks to the prediction service off the UI thread.

pub mod commands;
pub mod runtime;
