//! Assistant service: model path first, deterministic fallback second.
//!
//! Callers always receive a contract-shaped reply. Model failures, timeouts
//! and off-contract replies are logged and replaced by the fallback; only
//! request validation errors are surfaced.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::brain::{FallbackEngine, RngSource};
use crate::config::{AppConfig, DEFAULT_MODEL_TIMEOUT_SECS};
use crate::contract::{parse_model_reply, AnalysisResponse, ChatResponse, DEFAULT_STRESS_LEVEL};
use crate::error::{AppError, ErrorBody};
use crate::llm::prompts::{analysis_system_prompt, CHAT_SYSTEM_PROMPT};
use crate::llm::{ModelBackend, OpenAiCompatibleClient};
use crate::models::{AnalyzeRequest, ChatMessage, ChatRequest};

/// Entry point for chat turns and journal analyses.
#[derive(Clone)]
pub struct AssistantService {
    chat_backend: Option<Arc<dyn ModelBackend>>,
    analysis_backend: Option<Arc<dyn ModelBackend>>,
    fallback: FallbackEngine,
    model_timeout: Duration,
}

impl AssistantService {
    /// Service with no model backend: every answer comes from the fallback.
    pub fn offline() -> Self {
        Self {
            chat_backend: None,
            analysis_backend: None,
            fallback: FallbackEngine::new(),
            model_timeout: Duration::from_secs(DEFAULT_MODEL_TIMEOUT_SECS),
        }
    }

    /// Builds the service from configuration. Backends without a key stay disabled.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let mut service = Self::offline()
            .with_fallback(FallbackEngine::new().with_analysis_mode(config.analysis_fallback))
            .with_timeout(config.model_timeout);

        if config.chat.is_enabled() {
            service.chat_backend = Some(Arc::new(OpenAiCompatibleClient::from_config(&config.chat)?));
        } else {
            info!("No chat API key configured, chat answers come from the fallback");
        }

        if config.analysis.is_enabled() {
            service.analysis_backend =
                Some(Arc::new(OpenAiCompatibleClient::from_config(&config.analysis)?));
        } else {
            info!("No analysis API key configured, analyses come from the fallback");
        }

        Ok(service)
    }

    pub fn with_chat_backend(mut self, backend: Arc<dyn ModelBackend>) -> Self {
        self.chat_backend = Some(backend);
        self
    }

    pub fn with_analysis_backend(mut self, backend: Arc<dyn ModelBackend>) -> Self {
        self.analysis_backend = Some(backend);
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackEngine) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_timeout(mut self, model_timeout: Duration) -> Self {
        self.model_timeout = model_timeout;
        self
    }

    pub fn has_chat_backend(&self) -> bool {
        self.chat_backend.is_some()
    }

    pub fn has_analysis_backend(&self) -> bool {
        self.analysis_backend.is_some()
    }

    /// Answers one chat turn.
    #[instrument(skip_all, fields(turns = request.messages.len()))]
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        if let Some(backend) = &self.chat_backend {
            let reply = self
                .ask::<ChatResponse>(
                    backend.as_ref(),
                    CHAT_SYSTEM_PROMPT.to_string(),
                    request.messages.clone(),
                )
                .await;
            match reply {
                Ok(reply) => return Ok(reply),
                Err(e) => warn!(backend = backend.name(), "Chat model failed, using fallback: {}", e),
            }
        }

        let mut source = RngSource::thread_local();
        self.fallback.chat_reply(request, &mut source)
    }

    /// Analyzes one journal entry. Fails only on an invalid request.
    #[instrument(skip_all, fields(chars = request.text.chars().count()))]
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResponse, AppError> {
        request.check()?;

        if let Some(backend) = &self.analysis_backend {
            let date = request.date_or_today();
            let stress = request.stress_level.unwrap_or(DEFAULT_STRESS_LEVEL);
            let reply = self
                .ask::<AnalysisResponse>(
                    backend.as_ref(),
                    analysis_system_prompt(&date, stress),
                    vec![ChatMessage::user(request.text.clone())],
                )
                .await;
            match reply {
                Ok(reply) => return Ok(reply),
                Err(e) => warn!(
                    backend = backend.name(),
                    "Analysis model failed, using fallback: {}", e
                ),
            }
        }

        let mut source = RngSource::thread_local();
        self.fallback.analysis(request, &mut source)
    }

    /// Handles a raw chat body, mapping errors to the caller-visible body.
    pub async fn handle_chat_body(&self, body: &str) -> Result<ChatResponse, ErrorBody> {
        let request = ChatRequest::from_json(body).map_err(|e| report(&e))?;
        self.chat(&request).await.map_err(|e| report(&e))
    }

    /// Handles a raw analysis body, mapping errors to the caller-visible body.
    pub async fn handle_analyze_body(&self, body: &str) -> Result<AnalysisResponse, ErrorBody> {
        let request = AnalyzeRequest::from_json(body).map_err(|e| report(&e))?;
        self.analyze(&request).await.map_err(|e| report(&e))
    }

    async fn ask<T>(
        &self,
        backend: &dyn ModelBackend,
        system_prompt: String,
        messages: Vec<ChatMessage>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let content = timeout(self.model_timeout, backend.complete_json(system_prompt, messages))
            .await??;
        parse_model_reply(&content)
    }
}

fn report(err: &AppError) -> ErrorBody {
    if err.is_client_error() {
        warn!("Rejected request: {}", err);
    } else {
        error!("Request failed: {}", err);
    }
    ErrorBody::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::AnalysisFallbackMode;
    use crate::config::BackendConfig;

    #[test]
    fn test_from_config_without_keys_is_offline() {
        let service = AssistantService::from_config(&AppConfig::default()).unwrap();
        assert!(!service.has_chat_backend());
        assert!(!service.has_analysis_backend());
        assert_eq!(service.fallback.analysis_mode(), AnalysisFallbackMode::Fixed);
    }

    #[test]
    fn test_from_config_carries_fallback_mode() {
        let config = AppConfig {
            analysis_fallback: AnalysisFallbackMode::Classified,
            ..AppConfig::default()
        };

        let service = AssistantService::from_config(&config).unwrap();
        assert_eq!(service.fallback.analysis_mode(), AnalysisFallbackMode::Classified);
    }

    #[test]
    fn test_from_config_enables_keyed_backends() {
        let config = AppConfig {
            chat: BackendConfig {
                api_key: Some("gsk-test".to_string()),
                ..BackendConfig::chat_default()
            },
            ..AppConfig::default()
        };

        let service = AssistantService::from_config(&config).unwrap();
        assert!(service.has_chat_backend());
        assert!(!service.has_analysis_backend());
    }

    #[tokio::test]
    async fn test_offline_chat_is_marked_demo() {
        let service = AssistantService::offline();
        let reply = service
            .handle_chat_body(r#"{"messages": [{"role": "user", "content": "Bonjour"}]}"#)
            .await
            .unwrap();
        assert_eq!(reply.emotion_detected, "Accueillant");
        assert!(reply.is_demo());
    }
}
