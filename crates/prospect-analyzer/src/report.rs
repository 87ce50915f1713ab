//! The synchronous extraction pipeline
//!
//! ```text
//! response → Sections → parse_records (×3) → build_entities
//!          → cross_reference → apply_templates → AnalysisResult
//! ```

use crate::builders::extract;
use crate::crossref::cross_reference;
use crate::sections::Sections;
use crate::templates::apply_templates;
use prospect_domain::{AnalysisResult, Application, Competitor, CustomerPersona};
use tracing::info;

/// Turn a generated report into an [`AnalysisResult`]
///
/// Never fails: sections that are missing or records that are incomplete
/// simply produce fewer entities. The prompt and response are stored
/// verbatim in the result.
pub fn parse_report(prompt: impl Into<String>, response: &str, product_name: &str) -> AnalysisResult {
    let sections = Sections::split(response);

    let competitors: Vec<Competitor> = extract(sections.competitors);
    let applications: Vec<Application> = extract(sections.applications);
    let personas: Vec<CustomerPersona> = extract(sections.personas);

    let personas = cross_reference(personas, sections.potential_customers);
    let personas = apply_templates(personas, product_name);

    info!(
        competitors = competitors.len(),
        applications = applications.len(),
        personas = personas.len(),
        "Parsed analysis report"
    );

    AnalysisResult {
        competitors,
        applications,
        personas,
        prompt: prompt.into(),
        raw_response: response.to_string(),
    }
}
