//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::{Config, ProviderKind};
use crate::error::Result;
use crate::output::Formatter;
use prospect_analyzer::{AnalysisRequest, Analyzer, AnalyzerConfig, AnalyzerError};
use prospect_domain::traits::LlmProvider;
use prospect_domain::AnalysisResult;
use prospect_llm::{ollama, openai, OllamaProvider, OpenAiProvider};
use tracing::debug;

/// Provider settings after command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderChoice {
    /// Backend to call
    pub kind: ProviderKind,
    /// Model name
    pub model: String,
    /// Endpoint or base URL
    pub endpoint: String,
}

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let choice = resolve_provider(&args, config);
    debug!(?choice, "Resolved provider");

    let request = AnalysisRequest::new(args.product, args.location);
    let analyzer_config = config.analyzer.clone();

    let result = match choice.kind {
        ProviderKind::Ollama => {
            let provider = OllamaProvider::new(choice.endpoint, choice.model);
            run_analysis(provider, analyzer_config, request).await?
        }
        ProviderKind::OpenAi => {
            let provider = OpenAiProvider::from_env(choice.endpoint, choice.model)?;
            run_analysis(provider, analyzer_config, request).await?
        }
    };

    println!("{}", formatter.format_result(&result, args.emails)?);
    Ok(())
}

/// Merge command-line overrides into the configured provider.
///
/// Switching backends on the command line drops the configured model and
/// endpoint, since they belong to the other backend.
pub fn resolve_provider(args: &AnalyzeArgs, config: &Config) -> ProviderChoice {
    let kind = args.provider.map(Into::into).unwrap_or(config.provider.kind);
    let switched = kind != config.provider.kind;

    let model = args
        .model
        .clone()
        .or_else(|| (!switched).then(|| config.provider.model.clone()))
        .unwrap_or_else(|| default_model(kind).to_string());

    let endpoint = args
        .endpoint
        .clone()
        .or_else(|| if switched { None } else { config.provider.endpoint.clone() })
        .unwrap_or_else(|| default_endpoint(kind).to_string());

    ProviderChoice { kind, model, endpoint }
}

async fn run_analysis<L>(
    provider: L,
    config: AnalyzerConfig,
    request: AnalysisRequest,
) -> std::result::Result<AnalysisResult, AnalyzerError>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Into<AnalyzerError> + Send,
{
    let analyzer = Analyzer::new(provider, config)?;
    analyzer.analyze(request).await
}

fn default_model(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Ollama => "llama3",
        ProviderKind::OpenAi => openai::DEFAULT_MODEL,
    }
}

fn default_endpoint(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Ollama => ollama::DEFAULT_ENDPOINT,
        ProviderKind::OpenAi => openai::DEFAULT_BASE_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProviderArg;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            product: "ShelfSense".to_string(),
            location: "Germany".to_string(),
            provider: None,
            model: None,
            endpoint: None,
            emails: false,
        }
    }

    #[test]
    fn test_defaults_from_config() {
        let choice = resolve_provider(&args(), &Config::default());
        assert_eq!(choice.kind, ProviderKind::Ollama);
        assert_eq!(choice.model, "llama3");
        assert_eq!(choice.endpoint, ollama::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_configured_values_used() {
        let mut config = Config::default();
        config.provider.model = "mistral".to_string();
        config.provider.endpoint = Some("http://gpu-box:11434".to_string());

        let choice = resolve_provider(&args(), &config);
        assert_eq!(choice.model, "mistral");
        assert_eq!(choice.endpoint, "http://gpu-box:11434");
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.provider.model = "mistral".to_string();

        let mut args = args();
        args.model = Some("phi3".to_string());
        args.endpoint = Some("http://other:11434".to_string());

        let choice = resolve_provider(&args, &config);
        assert_eq!(choice.model, "phi3");
        assert_eq!(choice.endpoint, "http://other:11434");
    }

    #[test]
    fn test_switching_backend_drops_configured_model() {
        let mut config = Config::default();
        config.provider.model = "mistral".to_string();
        config.provider.endpoint = Some("http://gpu-box:11434".to_string());

        let mut args = args();
        args.provider = Some(ProviderArg::Openai);

        let choice = resolve_provider(&args, &config);
        assert_eq!(choice.kind, ProviderKind::OpenAi);
        assert_eq!(choice.model, openai::DEFAULT_MODEL);
        assert_eq!(choice.endpoint, openai::DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_run_analysis_with_mock() {
        let provider = prospect_llm::MockProvider::new("1. Competitors:\n1. Name: Acme\nDescription: d\nHeadquarters: Boston\nRevenue: $1B\n");
        let result = run_analysis(provider, AnalyzerConfig::default(), AnalysisRequest::new("ShelfSense", "Germany"))
            .await
            .unwrap();
        assert_eq!(result.competitors.len(), 1);
    }
}
