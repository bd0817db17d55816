//! Response Payload - canonical output of the fallback brain.
//!
//! Each call site adapts this shape into its own JSON schema
//! (see `crate::contract`).


use super::categories::Category;
use crate::error::AppError;

/// Upper bound of every emotion and stress score
pub const SCORE_MAX: u8 = 10;

/// Six emotion intensities on a 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmotionVector {
    pub joy: u8,
    pub sadness: u8,
    pub anxiety: u8,
    pub anger: u8,
    pub fatigue: u8,
    pub motivation: u8,
}

impl EmotionVector {
    pub const fn new(
        joy: u8,
        sadness: u8,
        anxiety: u8,
        anger: u8,
        fatigue: u8,
        motivation: u8,
    ) -> Self {
        Self {
            joy,
            sadness,
            anxiety,
            anger,
            fatigue,
            motivation,
        }
    }

    /// Scores in declaration order, with their names
    pub fn scores(&self) -> [(&'static str, u8); 6] {
        [
            ("joy", self.joy),
            ("sadness", self.sadness),
            ("anxiety", self.anxiety),
            ("anger", self.anger),
            ("fatigue", self.fatigue),
            ("motivation", self.motivation),
        ]
    }

    pub fn in_range(&self) -> bool {
        self.scores().iter().all(|(_, v)| *v <= SCORE_MAX)
    }
}

/// Structured result for one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePayload {
    pub category: Category,
    /// Index of the default-bucket variant, None for fixed templates
    pub variant: Option<usize>,
    pub emotion_label: String,
    pub reformulation: String,
    pub actions: Vec<String>,
    pub questions: Vec<String>,
    pub summary: String,
    pub emotions: EmotionVector,
    pub stress: u8,
}

impl ResponsePayload {
    /// Checks that every required field is populated and every score is in range.
    ///
    /// A failure here is a bug in the template tables, not a runtime condition.
    pub fn check_complete(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.emotion_label.trim().is_empty() {
            missing.push("emotion_label");
        }
        if self.reformulation.trim().is_empty() {
            missing.push("reformulation");
        }
        if self.actions.is_empty() || self.actions.iter().any(|a| a.trim().is_empty()) {
            missing.push("actions");
        }
        if self.questions.is_empty() || self.questions.iter().any(|q| q.trim().is_empty()) {
            missing.push("questions");
        }
        if self.summary.trim().is_empty() {
            missing.push("summary");
        }
        if !missing.is_empty() {
            return Err(AppError::Contract(format!(
                "payload for '{}' is missing {}",
                self.category,
                missing.join(", ")
            )));
        }

        if !self.emotions.in_range() || self.stress > SCORE_MAX {
            return Err(AppError::Contract(format!(
                "payload for '{}' has a score outside 0-{}",
                self.category, SCORE_MAX
            )));
        }

        Ok(())
    }
}
