use super::*;

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn defaults_to_local_predictor_endpoint() {
    let settings = PredictorSettings::default();
    let endpoint = settings.endpoint().expect("default endpoint");
    assert_eq!(endpoint.as_str(), "http://127.0.0.1:8000/predict/");
}

#[test]
fn file_config_overrides_predictor_url() {
    let mut settings = PredictorSettings::default();
    apply_file_config(&mut settings, "predictor_url = \"http://10.0.0.5:9000/predict/\"")
        .expect("apply");
    assert_eq!(settings.predictor_url, "http://10.0.0.5:9000/predict/");
}

#[test]
fn file_config_rejects_non_string_values() {
    let mut settings = PredictorSettings::default();
    assert!(apply_file_config(&mut settings, "predictor_url = 5").is_err());
    assert_eq!(settings, PredictorSettings::default());
}

#[test]
fn missing_settings_file_keeps_defaults() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("predictor_settings_missing_{suffix}.toml"));
    let settings = load_settings_from(&path);
    if env::var("PREDICTOR_URL").is_err() && env::var("APP__PREDICTOR_URL").is_err() {
        assert_eq!(settings, PredictorSettings::default());
    }
}

#[test]
fn loads_predictor_url_from_settings_file() {
    if env::var("PREDICTOR_URL").is_ok() || env::var("APP__PREDICTOR_URL").is_ok() {
        return;
    }

    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("predictor_settings_{suffix}.toml"));
    fs::write(&path, "predictor_url = \"https://predict.example.org/predict/\"\n")
        .expect("write settings");

    let settings = load_settings_from(&path);
    assert_eq!(settings.predictor_url, "https://predict.example.org/predict/");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn rejects_empty_and_non_http_endpoints() {
    assert!(parse_endpoint("   ").is_err());
    assert!(parse_endpoint("not a url").is_err());
    let err = parse_endpoint("ftp://127.0.0.1/predict/").expect_err("ftp rejected");
    assert!(err.to_string().contains("unsupported predictor url scheme"));
}

#[test]
fn trims_endpoint_whitespace() {
    let url = parse_endpoint("  http://localhost:8000/predict/ \n").expect("trimmed");
    assert_eq!(url.host_str(), Some("localhost"));
    assert_eq!(url.path(), "/predict/");
}
