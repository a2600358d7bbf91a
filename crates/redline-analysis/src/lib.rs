//! Contract analysis for Redline.
//!
//! Sends contract text to a chat-completion API with a language-specific
//! analysis prompt, then carves the model's free-text reply into four
//! labeled sections: recognized clauses, identified risks, inconsistencies,
//! and key terms.
//!
//! # Key Types
//!
//! - [`ContractAnalyzer`] / [`ContractAnalysis`] -- Analysis orchestration and result
//! - [`CompletionBackend`] / [`OpenAiClient`] -- Completion-API boundary
//! - [`Language`] -- Prompt and extraction language (English or Dutch)
//! - [`AnalysisError`] -- Failure taxonomy

pub mod analyzer;
pub mod client;
pub mod error;
pub mod extract;
pub mod prompts;

pub use analyzer::{ContractAnalysis, ContractAnalyzer};
pub use client::{ChatMessage, ChatRequest, ChatResponse, CompletionBackend, OpenAiClient};
pub use error::{AnalysisError, AnalysisResult};
pub use extract::{extract_sections, ExtractedSections};
pub use prompts::{system_prompt, Language};
