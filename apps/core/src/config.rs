//! Runtime configuration, read from the environment (and `.env` if present).

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{info, warn};
use validator::Validate;

use crate::brain::AnalysisFallbackMode;
use crate::error::AppError;

pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_ANALYSIS_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ANALYSIS_MODEL: &str = "gpt-4o";
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;

/// Connection settings for one OpenAI-compatible endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BackendConfig {
    /// Base URL up to and including the API version (e.g. `.../v1`).
    #[validate(length(min = 1))]
    pub base_url: String,
    /// Model identifier sent with every request.
    #[validate(length(min = 1))]
    pub model: String,
    /// Bearer credential. The backend is disabled when absent.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Sampling temperature, between 0.0 and 2.0.
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: Option<f32>,
    /// Upper bound on generated tokens.
    #[validate(range(min = 1))]
    pub max_tokens: Option<u32>,
}

impl BackendConfig {
    pub fn chat_default() -> Self {
        Self {
            base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            api_key: None,
            temperature: Some(0.7),
            max_tokens: Some(1024),
        }
    }

    pub fn analysis_default() -> Self {
        Self {
            base_url: DEFAULT_ANALYSIS_BASE_URL.to_string(),
            model: DEFAULT_ANALYSIS_MODEL.to_string(),
            api_key: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Whether a credential is configured.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Whole application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub chat: BackendConfig,
    pub analysis: BackendConfig,
    /// Upper bound on a single model call before falling back.
    pub model_timeout: Duration,
    pub analysis_fallback: AnalysisFallbackMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat: BackendConfig::chat_default(),
            analysis: BackendConfig::analysis_default(),
            model_timeout: Duration::from_secs(DEFAULT_MODEL_TIMEOUT_SECS),
            analysis_fallback: AnalysisFallbackMode::Fixed,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the configuration from the environment.
    pub fn load() -> Result<Self, AppError> {
        if let Err(e) = dotenv::dotenv() {
            // A missing .env file is the normal case in production
            if !e.not_found() {
                warn!("Failed to read .env file: {}", e);
            }
        }
        Self::from_env()
    }

    /// Reads the configuration from process environment variables only.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        config.chat.api_key = non_empty_var("GROQ_API_KEY");
        if let Some(url) = non_empty_var("MINDSPACE_CHAT_BASE_URL") {
            config.chat.base_url = url;
        }
        if let Some(model) = non_empty_var("MINDSPACE_CHAT_MODEL") {
            config.chat.model = model;
        }
        if let Some(temperature) = non_empty_var("MINDSPACE_CHAT_TEMPERATURE") {
            let value = temperature.parse::<f32>().map_err(|e| {
                AppError::Config(format!("MINDSPACE_CHAT_TEMPERATURE '{}': {}", temperature, e))
            })?;
            config.chat.temperature = Some(value);
        }

        config.analysis.api_key = non_empty_var("OPENAI_API_KEY");
        if let Some(url) = non_empty_var("MINDSPACE_ANALYSIS_BASE_URL") {
            config.analysis.base_url = url;
        }
        if let Some(model) = non_empty_var("MINDSPACE_ANALYSIS_MODEL") {
            config.analysis.model = model;
        }

        if let Some(secs) = non_empty_var("MINDSPACE_MODEL_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|e| {
                AppError::Config(format!("MINDSPACE_MODEL_TIMEOUT_SECS '{}': {}", secs, e))
            })?;
            config.model_timeout = Duration::from_secs(secs);
        }

        if let Some(mode) = non_empty_var("MINDSPACE_ANALYSIS_FALLBACK") {
            config.analysis_fallback = mode.parse()?;
        }

        config.check()?;
        info!(
            chat_model = %config.chat.model,
            chat_enabled = config.chat.is_enabled(),
            analysis_model = %config.analysis.model,
            analysis_enabled = config.analysis.is_enabled(),
            analysis_fallback = %config.analysis_fallback,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validates both backend sections.
    pub fn check(&self) -> Result<(), AppError> {
        for (section, backend) in [("chat", &self.chat), ("analysis", &self.analysis)] {
            backend
                .validate()
                .map_err(|e| AppError::Config(format!("{} backend: {}", section, e)))?;
        }
        if self.model_timeout.is_zero() {
            return Err(AppError::Config("model timeout must be positive".to_string()));
        }
        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
