//! Test Module
//!
//! Cross-module test suite for the MindSpace core.
//!
//! ## Test Categories
//! - `brain_tests`: normalization, rule priority, relational tones, default bucket
//! - `contract_tests`: chat and analysis schemas produced by the fallback
//! - `assistant_tests`: model path vs fallback selection with mock backends
//! - `config_tests`: environment-driven configuration

pub mod config_tests;
pub mod contract_tests;
