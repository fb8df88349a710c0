//! Client and service layer for the Google Gemini generative API.
//!
//! [`GeminiService`] is the high-level entry point used by the HTTP
//! handlers. It owns a [`client::GeminiClient`] when an API key is
//! configured and degrades gracefully when one is not.

pub mod client;
pub mod config;
pub mod extract;
pub mod service;

pub use client::{GeminiClient, GeminiError};
pub use config::GeminiConfig;
pub use service::{
    GeminiOptimized, GeminiQualityScore, GeminiService, GeneratedAnalysis, GeneratedPrompt,
    PromptSuggestion, SOURCE_GEMINI, SOURCE_GEMINI_FALLBACK,
};
