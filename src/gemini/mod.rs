//! Gemini API client and types.

mod client;
mod types;

pub use client::*;
pub use types::*;

use async_trait::async_trait;

use crate::error::GeminiResult;

/// Anything that turns a prompt into generated text.
///
/// [`GeminiClient`] is the production implementation; tests substitute a
/// mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for a single prompt.
    async fn generate_text(&self, prompt: &str) -> GeminiResult<String>;
}
