use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

/// The role of a conversation message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    #[default]
    User,
    Assistant,
    /// Any role this crate does not know about; kept so history still parses.
    #[serde(other)]
    Other,
}

/// A single message of the chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the sender. Defaults to `user` when absent.
    #[serde(default, deserialize_with = "role_or_other")]
    pub role: Role,
    /// The text content of the message. `null` and non-string values read as empty.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub content: String,
}

fn role_or_other<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(role) => serde_json::from_value(Value::String(role)).unwrap_or(Role::Other),
        _ => Role::Other,
    })
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(content) => content,
        _ => String::new(),
    })
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Body of a chat turn: the whole conversation so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Parses a raw request body. A missing or non-array `messages` is rejected.
    pub fn from_json(body: &str) -> Result<Self, AppError> {
        let required = || AppError::Validation("Messages array is required".to_string());

        let value: Value = serde_json::from_str(body).map_err(|_| required())?;
        if !value.get("messages").is_some_and(|m| m.is_array()) {
            return Err(required());
        }
        serde_json::from_value(value).map_err(AppError::from)
    }

    /// Text of the latest user message, empty if there is none.
    pub fn last_user_message(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }
}

/// Body of a journal-entry analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// The journal text. Must not be empty.
    #[serde(default)]
    #[validate(length(min = 1, message = "Text input is required"))]
    pub text: String,
    /// Entry date (`YYYY-MM-DD`). Today (UTC) when absent.
    #[serde(default)]
    pub date: Option<String>,
    /// Self-reported stress on a 0-10 scale.
    #[serde(default, rename = "stressLevel")]
    #[validate(range(max = 10, message = "stressLevel must be between 0 and 10"))]
    pub stress_level: Option<u8>,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            date: None,
            stress_level: None,
        }
    }

    /// Parses a raw request body and checks it.
    pub fn from_json(body: &str) -> Result<Self, AppError> {
        let request: Self = serde_json::from_str(body)?;
        request.check()?;
        Ok(request)
    }

    /// Validates the request, reporting the first failing rule's message.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| errors.to_string());
            AppError::Validation(message)
        })
    }

    /// The entry date, or today's UTC date.
    pub fn date_or_today(&self) -> String {
        match &self.date {
            Some(date) if !date.trim().is_empty() => date.clone(),
            _ => chrono::Utc::now().date_naive().to_string(),
        }
    }
}
