//! Fallback Engine - main orchestrator of the brain module.
//!
//! Runs the offline path end to end:
//! 1. Normalize the latest user text
//! 2. Match it against the priority table
//! 3. Synthesize the category payload
//! 4. Adapt it to the caller's schema
//!
//! Pure and synchronous: no I/O, no shared mutable state.

use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

use super::categories::{CategoryMatcher, MatchResult};
use super::payload::ResponsePayload;
use super::synthesizer::{ResponseSynthesizer, VariantSource};
use crate::contract::{AnalysisResponse, ChatResponse};
use crate::error::AppError;
use crate::models::{AnalyzeRequest, ChatRequest};

/// How the analysis fallback treats the journal text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisFallbackMode {
    /// Always the same demonstrative payload, whatever the text
    #[default]
    Fixed,
    /// Route the text through the category matcher
    Classified,
}

impl fmt::Display for AnalysisFallbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisFallbackMode::Fixed => write!(f, "fixed"),
            AnalysisFallbackMode::Classified => write!(f, "classified"),
        }
    }
}

impl FromStr for AnalysisFallbackMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(AnalysisFallbackMode::Fixed),
            "classified" => Ok(AnalysisFallbackMode::Classified),
            other => Err(AppError::Config(format!(
                "unknown analysis fallback mode '{}' (expected 'fixed' or 'classified')",
                other
            ))),
        }
    }
}

/// Deterministic substitute for the model-backed path
#[derive(Debug, Clone, Default)]
pub struct FallbackEngine {
    matcher: CategoryMatcher,
    synthesizer: ResponseSynthesizer,
    analysis_mode: AnalysisFallbackMode,
}

impl FallbackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rule table (tests, alternative priority policies)
    pub fn with_matcher(mut self, matcher: CategoryMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_analysis_mode(mut self, mode: AnalysisFallbackMode) -> Self {
        self.analysis_mode = mode;
        self
    }

    pub fn analysis_mode(&self) -> AnalysisFallbackMode {
        self.analysis_mode
    }

    pub fn classify(&self, text: &str) -> MatchResult {
        self.matcher.classify(text)
    }

    /// Canonical payload for a raw message
    pub fn respond(
        &self,
        text: &str,
        source: &mut dyn VariantSource,
    ) -> Result<ResponsePayload, AppError> {
        let matched = self.classify(text);
        debug!(
            category = %matched.category,
            rule = matched.rule.unwrap_or("-"),
            keyword = matched.matched_keyword.unwrap_or("-"),
            "fallback category selected"
        );

        let payload = self.synthesizer.synthesize(matched.category, source);
        if let Err(e) = payload.check_complete() {
            error!("Incomplete fallback payload: {}", e);
            return Err(e);
        }
        Ok(payload)
    }

    /// Chat fallback for the latest user message of a conversation
    pub fn chat_reply(
        &self,
        request: &ChatRequest,
        source: &mut dyn VariantSource,
    ) -> Result<ChatResponse, AppError> {
        self.chat_reply_for_text(request.last_user_message(), source)
    }

    pub fn chat_reply_for_text(
        &self,
        text: &str,
        source: &mut dyn VariantSource,
    ) -> Result<ChatResponse, AppError> {
        self.respond(text, source).map(ChatResponse::from_fallback)
    }

    /// Analysis fallback, fixed or classified depending on the mode
    pub fn analysis(
        &self,
        request: &AnalyzeRequest,
        source: &mut dyn VariantSource,
    ) -> Result<AnalysisResponse, AppError> {
        let date = request.date_or_today();
        match self.analysis_mode {
            AnalysisFallbackMode::Fixed => Ok(AnalysisResponse::demo(date, request.stress_level)),
            AnalysisFallbackMode::Classified => {
                let payload = self.respond(&request.text, source)?;
                Ok(AnalysisResponse::from_payload(payload, date, request.stress_level))
            }
        }
    }
}
