//! Caller-facing JSON schemas.
//!
//! The model-backed path and the fallback both produce these exact shapes,
//! so the chat surface, the emotion timeline and the dashboard never need
//! to know which one answered.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::brain::payload::ResponsePayload;
use crate::error::AppError;

/// Appended to every summary produced by the fallback path
pub const DEMO_MARKER: &str = " (Mode Démo)";

/// Stress level assumed when the caller does not provide one
pub const DEFAULT_STRESS_LEVEL: u8 = 5;

// --- Chat ---

/// Emotion subset exposed to the chat surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ChatEmotions {
    #[validate(range(max = 10))]
    pub joie: u8,
    #[serde(rename = "anxiété")]
    #[validate(range(max = 10))]
    pub anxiete: u8,
    #[validate(range(max = 10))]
    pub motivation: u8,
}

/// Reply of one chat turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ChatResponse {
    #[validate(length(min = 1))]
    pub reformulation: String,
    #[validate(length(min = 1))]
    pub emotion_detected: String,
    #[validate(length(min = 1))]
    pub suggested_actions: Vec<String>,
    #[validate(length(min = 1))]
    pub open_questions: Vec<String>,
    #[validate(length(min = 1))]
    pub motivational_summary: String,
    #[validate(nested)]
    pub emotions: ChatEmotions,
    #[validate(range(max = 10))]
    pub stress_score: u8,
}

impl ChatResponse {
    /// Adapts a fallback payload, marking the summary as demo output
    pub fn from_fallback(payload: ResponsePayload) -> Self {
        Self {
            reformulation: payload.reformulation,
            emotion_detected: payload.emotion_label,
            suggested_actions: payload.actions,
            open_questions: payload.questions,
            motivational_summary: format!("{}{}", payload.summary, DEMO_MARKER),
            emotions: ChatEmotions {
                joie: payload.emotions.joy,
                anxiete: payload.emotions.anxiety,
                motivation: payload.emotions.motivation,
            },
            stress_score: payload.stress,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.motivational_summary.ends_with(DEMO_MARKER)
    }

    /// Formats the reply as the chat surface displays it
    pub fn render_reply(&self) -> String {
        let mut reply = String::new();

        if !self.reformulation.is_empty() {
            reply.push_str(&self.reformulation);
            reply.push_str("\n\n");
        }
        if !self.motivational_summary.is_empty() {
            reply.push_str(&format!("💪 {}\n\n", self.motivational_summary));
        }
        if !self.suggested_actions.is_empty() {
            reply.push_str("🌱 Suggestions :\n");
            for action in &self.suggested_actions {
                reply.push_str(&format!("• {}\n", action));
            }
            reply.push('\n');
        }
        if let Some(question) = self.open_questions.first() {
            reply.push_str(&format!("❓ {}", question));
        }

        reply.trim().to_string()
    }
}

// --- Analysis ---

/// Full emotion vector exposed to the journal dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AnalysisEmotions {
    #[validate(range(max = 10))]
    pub joie: u8,
    #[validate(range(max = 10))]
    pub tristesse: u8,
    #[serde(rename = "anxiété")]
    #[validate(range(max = 10))]
    pub anxiete: u8,
    #[serde(rename = "colère")]
    #[validate(range(max = 10))]
    pub colere: u8,
    #[validate(range(max = 10))]
    pub fatigue: u8,
    #[validate(range(max = 10))]
    pub motivation: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Haute")]
    High,
    #[serde(rename = "Moyenne")]
    Medium,
    #[serde(rename = "Basse")]
    Low,
}

impl Priority {
    /// Priority of the n-th item of an ordered action list
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            0 => Priority::High,
            1 => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

/// One suggestion of a journal analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Suggestion {
    #[serde(rename = "micro-exercice")]
    MicroExercise {
        name: String,
        duration_min: u32,
        instructions: String,
    },
    #[serde(rename = "to-do")]
    Todo { task: String, priority: Priority },
}

impl Suggestion {
    pub fn exercise(name: &str, duration_min: u32, instructions: &str) -> Self {
        Suggestion::MicroExercise {
            name: name.to_string(),
            duration_min,
            instructions: instructions.to_string(),
        }
    }

    pub fn todo(task: &str, priority: Priority) -> Self {
        Suggestion::Todo {
            task: task.to_string(),
            priority,
        }
    }
}

/// Result of a journal-entry analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AnalysisResponse {
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(nested)]
    pub emotions: AnalysisEmotions,
    #[validate(range(max = 10))]
    pub stress_score: u8,
    #[validate(length(min = 1))]
    pub suggestions: Vec<Suggestion>,
    #[validate(length(min = 1))]
    pub summary: String,
    /// Reserved for high-stress conditions; never set by the fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<String>>,
}

impl AnalysisResponse {
    /// The fixed demonstrative analysis, independent of the journal text
    pub fn demo(date: String, stress_level: Option<u8>) -> Self {
        Self {
            date,
            emotions: AnalysisEmotions {
                joie: 5,
                tristesse: 3,
                anxiete: 4,
                colere: 2,
                fatigue: 4,
                motivation: 6,
            },
            // An explicit 0 is a real self-report and is kept; only an absent
            // level becomes the default
            stress_score: stress_level.unwrap_or(DEFAULT_STRESS_LEVEL),
            suggestions: vec![
                Suggestion::exercise(
                    "Respiration 4-7-8",
                    3,
                    "Inspirez 4 sec, retenez 7 sec, expirez 8 sec. Répétez 4 fois.",
                ),
                Suggestion::exercise(
                    "Pause gratitude",
                    2,
                    "Écrivez 3 choses pour lesquelles vous êtes reconnaissant aujourd'hui.",
                ),
                Suggestion::todo("Faire une courte marche de 10 minutes", Priority::High),
            ],
            summary: format!(
                "Vous avez pris le temps de réfléchir à vos émotions, c'est déjà un grand pas ! Continuez à prendre soin de vous.{}",
                DEMO_MARKER
            ),
            alerts: None,
        }
    }

    /// Adapts a classified payload into the analysis schema.
    ///
    /// Actions become to-dos ranked Haute, Moyenne, then Basse.
    pub fn from_payload(payload: ResponsePayload, date: String, stress_level: Option<u8>) -> Self {
        let emotions = payload.emotions;
        Self {
            date,
            emotions: AnalysisEmotions {
                joie: emotions.joy,
                tristesse: emotions.sadness,
                anxiete: emotions.anxiety,
                colere: emotions.anger,
                fatigue: emotions.fatigue,
                motivation: emotions.motivation,
            },
            stress_score: stress_level.unwrap_or(payload.stress),
            suggestions: payload
                .actions
                .iter()
                .enumerate()
                .map(|(rank, action)| Suggestion::todo(action, Priority::for_rank(rank)))
                .collect(),
            summary: format!("{}{}", payload.summary, DEMO_MARKER),
            alerts: None,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.summary.ends_with(DEMO_MARKER)
    }
}

// --- Model replies ---

/// Parses a model reply into a caller schema and checks it.
///
/// Tolerates prose around the JSON object. Anything that does not satisfy
/// the schema is rejected so the caller can fall back.
pub fn parse_model_reply<T>(content: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let no_object = || AppError::Model("model reply contains no JSON object".to_string());
    let start = content.find('{').ok_or_else(no_object)?;

    // Only the first complete value is read; whatever follows it is ignored
    let reply: T = serde_json::Deserializer::from_str(&content[start..])
        .into_iter::<T>()
        .next()
        .ok_or_else(no_object)?
        .map_err(|e| AppError::Model(format!("model reply does not match schema: {}", e)))?;
    reply
        .validate()
        .map_err(|e| AppError::Model(format!("model reply failed validation: {}", e)))?;

    Ok(reply)
}
