//! Prospect Analyzer
//!
//! Turns a generated market report into typed competitors, product
//! applications, and customer personas.
//!
//! # Overview
//!
//! The report is plain text written by a language model. It is expected to
//! contain four numbered sections ("Competitors", "Product Applications",
//! "Customer Personas", "Potential Customers") whose items are numbered
//! `Label: value` blocks. The text is not trusted: missing sections yield
//! empty lists and incomplete items are dropped rather than failing the
//! analysis.
//!
//! # Architecture
//!
//! ```text
//! Product + Location → PromptBuilder → LlmProvider → response
//!   response → Sections → Record Parser → Entity Builders
//!            → Cross-Referencer → Template Renderer → AnalysisResult
//! ```
//!
//! Everything after the provider call is synchronous and pure, and is
//! available on its own as [`parse_report`].
//!
//! # Example Usage
//!
//! ```no_run
//! use prospect_analyzer::{AnalysisRequest, Analyzer, AnalyzerConfig};
//! use prospect_llm::OllamaProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = OllamaProvider::default_endpoint("llama3");
//! let analyzer = Analyzer::new(llm, AnalyzerConfig::default())?;
//!
//! let result = analyzer
//!     .analyze(AnalysisRequest::new("ShelfSense", "Germany"))
//!     .await?;
//!
//! println!("Competitors: {}", result.competitors.len());
//! for persona in &result.personas {
//!     println!("{}: {:?}", persona.name(), persona.potential_customers());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod prompt;
mod report;
mod types;

pub mod builders;
pub mod crossref;
pub mod parser;
pub mod sections;
pub mod templates;


pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use prompt::PromptBuilder;
pub use report::parse_report;
pub use types::AnalysisRequest;
