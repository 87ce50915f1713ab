//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::prompt::PromptBuilder;
use crate::report::parse_report;
use crate::types::AnalysisRequest;
use prospect_domain::traits::LlmProvider;
use prospect_domain::AnalysisResult;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info};

/// The Analyzer asks a text-generation service for a market report and
/// extracts typed entities from it
pub struct Analyzer<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: AnalyzerConfig,
}

impl<L> Analyzer<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Into<AnalyzerError> + Send,
{
    /// Create a new Analyzer
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::Config` if the configuration is invalid.
    pub fn new(llm_provider: L, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;
        Ok(Self {
            llm_provider: Arc::new(llm_provider),
            config,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run one analysis
    ///
    /// Either a complete result is returned (possibly with empty entity
    /// lists) or an error; never a partial result.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalyzerError> {
        let product_name = request.product_name.trim();
        let location = request.location.trim();
        if product_name.is_empty() {
            return Err(AnalyzerError::EmptyProductName);
        }
        if location.is_empty() {
            return Err(AnalyzerError::EmptyLocation);
        }

        let start = Instant::now();
        info!(
            product = product_name,
            location,
            model = self.llm_provider.model_name(),
            "Starting market analysis"
        );

        let prompt = PromptBuilder::new(product_name, location)
            .with_config(&self.config)
            .build();
        debug!("Prompt length: {} chars", prompt.len());

        let response = timeout(self.config.generation_timeout(), self.call_llm(&prompt))
            .await
            .map_err(|_| AnalyzerError::Timeout(self.config.generation_timeout_secs))??;

        if response.trim().is_empty() {
            return Err(AnalyzerError::EmptyResponse);
        }
        let response_chars = response.chars().count();
        if response_chars > self.config.max_response_length {
            return Err(AnalyzerError::ResponseTooLong(
                response_chars,
                self.config.max_response_length,
            ));
        }
        debug!("Response length: {} chars", response_chars);

        let result = parse_report(prompt, &response, product_name);

        info!(
            entities = result.entity_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Market analysis complete"
        );
        Ok(result)
    }

    /// Call the provider off the async executor; `LlmProvider` is blocking
    async fn call_llm(&self, prompt: &str) -> Result<String, AnalyzerError> {
        let llm = Arc::clone(&self.llm_provider);
        let prompt = prompt.to_string();

        tokio::task::spawn_blocking(move || llm.generate(&prompt).map_err(Into::into))
            .await
            .map_err(|e| AnalyzerError::Llm(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospect_llm::MockProvider;

    fn create_test_analyzer(response: &str) -> Analyzer<MockProvider> {
        Analyzer::new(MockProvider::new(response), AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalyzerConfig::default();
        config.competitor_count = 0;
        let result = Analyzer::new(MockProvider::default(), config);
        assert!(matches!(result, Err(AnalyzerError::Config(_))));
    }

    #[tokio::test]
    async fn test_empty_product_name() {
        let analyzer = create_test_analyzer("1. Competitors:");
        let result = analyzer.analyze(AnalysisRequest::new("  ", "Germany")).await;
        assert!(matches!(result, Err(AnalyzerError::EmptyProductName)));
    }

    #[tokio::test]
    async fn test_empty_location() {
        let analyzer = create_test_analyzer("1. Competitors:");
        let result = analyzer.analyze(AnalysisRequest::new("ShelfSense", "")).await;
        assert!(matches!(result, Err(AnalyzerError::EmptyLocation)));
    }

    #[tokio::test]
    async fn test_preconditions_checked_before_generation() {
        let provider = MockProvider::new("unused");
        let analyzer = Analyzer::new(provider.clone(), AnalyzerConfig::default()).unwrap();
        let _ = analyzer.analyze(AnalysisRequest::new("", "Germany")).await;
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_response_is_error() {
        let analyzer = create_test_analyzer("  \n  ");
        let result = analyzer.analyze(AnalysisRequest::new("ShelfSense", "Germany")).await;
        assert!(matches!(result, Err(AnalyzerError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_response_too_long() {
        let mut config = AnalyzerConfig::default();
        config.max_response_length = 10;
        let analyzer = Analyzer::new(MockProvider::new("a".repeat(11)), config).unwrap();
        let result = analyzer.analyze(AnalysisRequest::new("ShelfSense", "Germany")).await;
        assert!(matches!(result, Err(AnalyzerError::ResponseTooLong(11, 10))));
    }

    #[tokio::test]
    async fn test_provider_called_once() {
        let provider = MockProvider::new("1. Competitors:\n");
        let analyzer = Analyzer::new(provider.clone(), AnalyzerConfig::default()).unwrap();
        analyzer
            .analyze(AnalysisRequest::new("ShelfSense", "Germany"))
            .await
            .unwrap();
        assert_eq!(provider.call_count(), 1);
    }
}
