//! Configuration Tests
//!
//! Environment-driven configuration, isolated with `temp_env`.

use crate::brain::AnalysisFallbackMode;
use crate::config::{AppConfig, DEFAULT_ANALYSIS_MODEL, DEFAULT_CHAT_MODEL};
use crate::error::AppError;
use std::time::Duration;

const CONFIG_VARS: [&str; 9] = [
    "GROQ_API_KEY",
    "OPENAI_API_KEY",
    "MINDSPACE_CHAT_BASE_URL",
    "MINDSPACE_CHAT_MODEL",
    "MINDSPACE_CHAT_TEMPERATURE",
    "MINDSPACE_ANALYSIS_BASE_URL",
    "MINDSPACE_ANALYSIS_MODEL",
    "MINDSPACE_MODEL_TIMEOUT_SECS",
    "MINDSPACE_ANALYSIS_FALLBACK",
];

/// Runs `f` with every config variable unset except the given overrides
fn with_config_env<R>(overrides: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = CONFIG_VARS
        .iter()
        .map(|key| {
            let value = overrides.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
            (*key, value)
        })
        .collect();
    temp_env::with_vars(vars, f)
}

#[test]
fn test_defaults_without_keys() {
    let config = with_config_env(&[], AppConfig::from_env).unwrap();

    assert!(!config.chat.is_enabled());
    assert!(!config.analysis.is_enabled());
    assert_eq!(config.chat.model, DEFAULT_CHAT_MODEL);
    assert_eq!(config.analysis.model, DEFAULT_ANALYSIS_MODEL);
    assert_eq!(config.chat.temperature, Some(0.7));
    assert_eq!(config.model_timeout, Duration::from_secs(30));
    assert_eq!(config.analysis_fallback, AnalysisFallbackMode::Fixed);
}

#[test]
fn test_keys_and_overrides() {
    let config = with_config_env(
        &[
            ("GROQ_API_KEY", "gsk-test"),
            ("OPENAI_API_KEY", "sk-test"),
            ("MINDSPACE_CHAT_BASE_URL", "http://localhost:8080/v1"),
            ("MINDSPACE_CHAT_MODEL", "local-model"),
            ("MINDSPACE_CHAT_TEMPERATURE", "0.2"),
            ("MINDSPACE_MODEL_TIMEOUT_SECS", "5"),
            ("MINDSPACE_ANALYSIS_FALLBACK", "classified"),
        ],
        AppConfig::from_env,
    )
    .unwrap();

    assert!(config.chat.is_enabled());
    assert!(config.analysis.is_enabled());
    assert_eq!(config.chat.base_url, "http://localhost:8080/v1");
    assert_eq!(config.chat.model, "local-model");
    assert_eq!(config.chat.temperature, Some(0.2));
    assert_eq!(config.model_timeout, Duration::from_secs(5));
    assert_eq!(config.analysis_fallback, AnalysisFallbackMode::Classified);
}

#[test]
fn test_blank_key_disables_backend() {
    let config = with_config_env(&[("GROQ_API_KEY", "   ")], AppConfig::from_env).unwrap();
    assert!(!config.chat.is_enabled());
}

#[test]
fn test_invalid_temperature_is_config_error() {
    for value in ["3.5", "chaud"] {
        let result = with_config_env(&[("MINDSPACE_CHAT_TEMPERATURE", value)], AppConfig::from_env);
        assert!(
            matches!(result, Err(AppError::Config(_))),
            "Expected config error for {:?}",
            value
        );
    }
}

#[test]
fn test_invalid_timeout_is_config_error() {
    for value in ["0", "-1", "soon"] {
        let result =
            with_config_env(&[("MINDSPACE_MODEL_TIMEOUT_SECS", value)], AppConfig::from_env);
        assert!(matches!(result, Err(AppError::Config(_))), "Expected config error for {:?}", value);
    }
}

#[test]
fn test_unknown_fallback_mode_is_config_error() {
    let result = with_config_env(&[("MINDSPACE_ANALYSIS_FALLBACK", "smart")], AppConfig::from_env);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_api_key_never_serialized() {
    let config = with_config_env(&[("OPENAI_API_KEY", "sk-secret")], AppConfig::from_env).unwrap();

    let value = serde_json::to_value(&config.analysis).unwrap();
    assert!(value.get("api_key").is_none());
    assert!(!value.to_string().contains("sk-secret"));
}
