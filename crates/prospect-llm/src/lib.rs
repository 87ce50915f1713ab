//! Prospect LLM Provider Layer
//!
//! Pluggable text-generation providers for market analysis.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from `prospect-domain`.
//! It supports multiple backends with a common interface.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//! - `OpenAiProvider`: OpenAI-compatible chat completions API (requires an API key)
//!
//! # Examples
//!
//! ```
//! use prospect_llm::MockProvider;
//! use prospect_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("1. Competitors:\n1. Name: Acme");
//! let result = provider.generate("analyze widgets").unwrap();
//! assert!(result.starts_with("1. Competitors:"));
//! ```

#![warn(missing_docs)]

pub mod ollama;
pub mod openai;

use prospect_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Errors that can occur during text generation
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// API key absent or rejected
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use prospect_llm::MockProvider;
/// use prospect_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert_eq!(provider.generate("prompt2").unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
    MissingCredentials,
}

impl MockProvider {
    /// Name reported by `model_name`
    pub const MODEL_NAME: &'static str = "mock";

    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.replies()
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap_or_else(|e| e.into_inner()) = 0;
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.replies().insert(prompt.into(), MockReply::Error);
    }

    /// Configure to fail with missing credentials for a specific prompt
    pub fn add_missing_credentials(&mut self, prompt: impl Into<String>) {
        self.replies()
            .insert(prompt.into(), MockReply::MissingCredentials);
    }

    fn replies(&self) -> std::sync::MutexGuard<'_, HashMap<String, MockReply>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap_or_else(|e| e.into_inner()) += 1;

        match self.replies().get(prompt) {
            Some(MockReply::Text(response)) => Ok(response.clone()),
            Some(MockReply::Error) => Err(LlmError::Other("Mock error".to_string())),
            Some(MockReply::MissingCredentials) => Err(LlmError::MissingCredentials(
                "mock provider has no API key".to_string(),
            )),
            None => Ok(self.default_response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        Self::MODEL_NAME
    }
}
