use std::{collections::HashMap, fs, path::Path};

use anyhow::{anyhow, Context};
use url::Url;

pub const DEFAULT_PREDICTOR_URL: &str = "http://127.0.0.1:8000/predict/";
pub const SETTINGS_FILE: &str = "predictor.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorSettings {
    pub predictor_url: String,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            predictor_url: DEFAULT_PREDICTOR_URL.into(),
        }
    }
}

impl PredictorSettings {
    pub fn endpoint(&self) -> anyhow::Result<Url> {
        parse_endpoint(&self.predictor_url)
    }
}

/// Defaults, then `predictor.toml` in the working directory, then environment.
pub fn load_settings() -> PredictorSettings {
    load_settings_from(Path::new(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> PredictorSettings {
    let mut settings = PredictorSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match apply_file_config(&mut settings, &raw) {
            Ok(()) => tracing::debug!(path = %path.display(), "loaded predictor settings file"),
            Err(err) => tracing::warn!(path = %path.display(), "ignoring predictor settings file: {err:#}"),
        }
    }

    if let Ok(v) = std::env::var("PREDICTOR_URL") {
        settings.predictor_url = v;
    }
    if let Ok(v) = std::env::var("APP__PREDICTOR_URL") {
        settings.predictor_url = v;
    }

    settings
}

fn apply_file_config(settings: &mut PredictorSettings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)
        .context("predictor settings file is not a flat string table")?;
    if let Some(v) = file_cfg.get("predictor_url") {
        settings.predictor_url = v.clone();
    }
    Ok(())
}

pub fn parse_endpoint(raw: &str) -> anyhow::Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(anyhow!("predictor url is empty"));
    }

    let url = Url::parse(raw).with_context(|| format!("invalid predictor url '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!(
            "unsupported predictor url scheme '{other}' in '{raw}' (expected http or https)"
        )),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
