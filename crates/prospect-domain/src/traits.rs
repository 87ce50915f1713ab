//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for text-generation providers
///
/// Implemented by the infrastructure layer (prospect-llm)
pub trait LlmProvider {
    /// Error type for provider operations
    type Error;

    /// Generate a completion for the prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model behind this provider, for logs and reports
    fn model_name(&self) -> &str;
}
