use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::ModelBackend;
use crate::config::BackendConfig;
use crate::error::AppError;
use crate::models::{ChatMessage, Role};

/// Client for any endpoint speaking the OpenAI chat-completions protocol
/// (OpenAI, Groq, llama.cpp server, ...).
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    response_format: ResponseFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatibleClient {
    /// Builds a client from a backend section. Fails when no credential is set.
    pub fn from_config(config: &BackendConfig) -> Result<Self, AppError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            AppError::Config(format!("no API key configured for model '{}'", config.model))
        })?;

        Ok(Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn headers(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| AppError::Config(format!("invalid API key: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);
        Ok(headers)
    }
}

fn wire_role(role: Role) -> Option<&'static str> {
    match role {
        Role::System => Some("system"),
        Role::User => Some("user"),
        Role::Assistant => Some("assistant"),
        Role::Other => None,
    }
}

#[async_trait]
impl ModelBackend for OpenAiCompatibleClient {
    fn name(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all, fields(turns = messages.len()))]
    async fn complete_json(
        &self,
        system_prompt: String,
        messages: Vec<ChatMessage>,
    ) -> Result<String, AppError> {
        let mut wire = Vec::with_capacity(messages.len() + 1);
        wire.push(WireMessage {
            role: "system",
            content: &system_prompt,
        });
        wire.extend(messages.iter().filter_map(|m| {
            wire_role(m.role).map(|role| WireMessage {
                role,
                content: &m.content,
            })
        }));

        let payload = CompletionRequest {
            model: &self.model,
            messages: wire,
            response_format: ResponseFormat { kind: "json_object" },
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        info!(model = %self.model, "Requesting completion");
        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .headers(self.headers()?)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Model(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        let completion: CompletionResponse = res.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AppError::Model("completion has no content".to_string()))?;

        debug!(bytes = content.len(), "Completion received");
        Ok(content)
    }
}
