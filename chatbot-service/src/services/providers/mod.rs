//! Text generation provider abstraction.
//!
//! Trait-based so the Gemini backend can be swapped for a mock when no API
//! key is configured, and for test doubles in integration tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
///
/// The HTTP surface never branches on the variant; every failure is rendered
/// into the response envelope as a single model-failure string.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Model returned an empty response")]
    EmptyResponse,
}

/// Trait for single-shot text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text completion for the prompt, non-streaming.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
