//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Prospect - Market analysis for a product in a location.
#[derive(Debug, Parser)]
#[command(name = "prospect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PROSPECT_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names only)
    Quiet,
}

/// Provider options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProviderArg {
    /// Local Ollama server
    Ollama,
    /// OpenAI-compatible API (reads OPENAI_API_KEY)
    Openai,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate and analyze a market report
    Analyze(AnalyzeArgs),

    /// Analyze a previously saved report
    Parse(ParseArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Product name
    #[arg(short, long)]
    pub product: String,

    /// Target location (country, region or city)
    #[arg(short, long)]
    pub location: String,

    /// Provider to use instead of the configured one
    #[arg(long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Provider endpoint or base URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print the email templates for each persona
    #[arg(short, long)]
    pub emails: bool,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Product name used in the email templates
    #[arg(short, long)]
    pub product: String,

    /// Location the report was generated for
    #[arg(short, long)]
    pub location: Option<String>,

    /// File containing the report
    #[arg(long, conflicts_with = "stdin")]
    pub file: Option<String>,

    /// Read the report from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Print the email templates for each persona
    #[arg(short, long)]
    pub emails: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ProviderArg> for crate::config::ProviderKind {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Ollama => crate::config::ProviderKind::Ollama,
            ProviderArg::Openai => crate::config::ProviderKind::OpenAi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputFormat, ProviderKind};

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from([
            "prospect",
            "analyze",
            "--product",
            "ShelfSense",
            "--location",
            "Germany",
            "--provider",
            "openai",
            "--emails",
        ]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.product, "ShelfSense");
                assert_eq!(args.location, "Germany");
                assert_eq!(args.provider, Some(ProviderArg::Openai));
                assert!(args.model.is_none());
                assert!(args.emails);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_analyze_requires_location() {
        let result = Cli::try_parse_from(["prospect", "analyze", "--product", "ShelfSense"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_command_with_global_flags() {
        let cli = Cli::parse_from([
            "prospect",
            "parse",
            "-p",
            "ShelfSense",
            "--file",
            "report.txt",
            "--format",
            "json",
            "-v",
        ]);
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.file.as_deref(), Some("report.txt"));
                assert!(args.location.is_none());
                assert!(!args.stdin);
            }
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_parse_file_and_stdin_conflict() {
        let result = Cli::try_parse_from([
            "prospect", "parse", "-p", "X", "--file", "r.txt", "--stdin",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["prospect", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_conversions() {
        let format: OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, OutputFormat::Quiet);
        let kind: ProviderKind = ProviderArg::Openai.into();
        assert_eq!(kind, ProviderKind::OpenAi);
    }
}
