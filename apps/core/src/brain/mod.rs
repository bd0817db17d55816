//! # Brain Module
//!
//! Deterministic, non-LLM fallback for MindSpace.
//! Answers a chat turn or a journal analysis when the model-backed path is
//! unavailable, with exactly the JSON shape the model would have produced.
//!
//! ## Components
//! - `normalizer`: case and diacritic folding for matching
//! - `categories`: ordered keyword rules, first match wins
//! - `templates`: static payload per category, listening variants
//! - `synthesizer`: category -> payload, injectable variant source
//! - `payload`: canonical output structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod categories;
pub mod normalizer;
pub mod payload;
pub mod synthesizer;
pub mod templates;

pub use analyzer::{AnalysisFallbackMode, FallbackEngine};
pub use categories::{
    Category, CategoryMatcher, CategoryRule, MatchResult, RelationalTone, Resolution, ToneRule,
    Trigger, DEFAULT_RULES,
};
pub use normalizer::normalize;
pub use payload::{EmotionVector, ResponsePayload};
pub use synthesizer::{FixedVariant, ResponseSynthesizer, RngSource, VariantSource};
