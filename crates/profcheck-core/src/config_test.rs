use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PROFCHECK_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.tesseract_bin.to_str(), Some("tesseract"));
    assert_eq!(cfg.ocr_lang, "eng");
    assert_eq!(cfg.ocr_timeout_secs, 30);
    assert_eq!(cfg.ocr_timeout().as_secs(), 30);
    assert_eq!(cfg.max_upload_bytes, 10 * 1024 * 1024);
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("PROFCHECK_ENV", "production");
    map.insert("PROFCHECK_BIND_ADDR", "127.0.0.1:8080");
    map.insert("PROFCHECK_LOG_LEVEL", "debug");
    map.insert("PROFCHECK_TESSERACT_BIN", "/usr/local/bin/tesseract");
    map.insert("PROFCHECK_OCR_LANG", "eng+spa");
    map.insert("PROFCHECK_OCR_TIMEOUT_SECS", "5");
    map.insert("PROFCHECK_MAX_UPLOAD_BYTES", "1024");

    let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should be valid");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.tesseract_bin.to_str(), Some("/usr/local/bin/tesseract"));
    assert_eq!(cfg.ocr_lang, "eng+spa");
    assert_eq!(cfg.ocr_timeout_secs, 5);
    assert_eq!(cfg.max_upload_bytes, 1024);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("PROFCHECK_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROFCHECK_BIND_ADDR"),
        "expected InvalidEnvVar(PROFCHECK_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("PROFCHECK_OCR_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROFCHECK_OCR_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PROFCHECK_OCR_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("PROFCHECK_OCR_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROFCHECK_OCR_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PROFCHECK_OCR_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_ocr_lang() {
    let mut map = HashMap::new();
    map.insert("PROFCHECK_OCR_LANG", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROFCHECK_OCR_LANG"),
        "expected InvalidEnvVar(PROFCHECK_OCR_LANG), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_upload_limit() {
    let mut map = HashMap::new();
    map.insert("PROFCHECK_MAX_UPLOAD_BYTES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROFCHECK_MAX_UPLOAD_BYTES"),
        "expected InvalidEnvVar(PROFCHECK_MAX_UPLOAD_BYTES), got: {result:?}"
    );
}
