//! MindSpace core: chat and journal-analysis answers for a well-being
//! assistant, with a deterministic French fallback when no model answers.

pub mod assistant;
pub mod brain;
pub mod config;
pub mod contract;
pub mod error;
pub mod llm;
pub mod models;

pub use assistant::AssistantService;
pub use error::{AppError, ErrorBody};

#[cfg(test)]
mod tests;
