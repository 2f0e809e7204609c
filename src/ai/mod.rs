//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::{GEMINI_MODEL, LlmClient};
pub use prompt_builder::{build_summary_prompt, estimate_tokens};
