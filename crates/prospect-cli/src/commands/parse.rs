//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use prospect_analyzer::{parse_report, AnalyzerConfig, PromptBuilder};
use prospect_domain::AnalysisResult;
use std::fs;
use std::io::{self, Read};

/// Execute the parse command.
pub async fn execute_parse(args: ParseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let report = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = &args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let result = analyze_report(&args.product, args.location.as_deref(), &report, &config.analyzer)?;
    if result.is_empty() {
        eprintln!("{}", formatter.warning("The report contained no recognizable sections"));
    }

    println!("{}", formatter.format_result(&result, args.emails)?);
    Ok(())
}

/// Run the extraction pipeline over a saved report.
///
/// The prompt is rebuilt when the location is known and left empty otherwise.
pub fn analyze_report(
    product: &str,
    location: Option<&str>,
    report: &str,
    config: &AnalyzerConfig,
) -> Result<AnalysisResult> {
    let product = product.trim();
    if product.is_empty() {
        return Err(CliError::InvalidInput("Product name cannot be empty".to_string()));
    }

    let prompt = location
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| PromptBuilder::new(product, l).with_config(config).build())
        .unwrap_or_default();

    Ok(parse_report(prompt, report, product))
}
