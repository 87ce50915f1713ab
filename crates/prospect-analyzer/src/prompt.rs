//! Prompt construction for market analysis

use crate::config::AnalyzerConfig;

/// Builds the prompt asking the model for a four-section market report
pub struct PromptBuilder {
    product_name: String,
    location: String,
    competitor_count: usize,
    application_count: usize,
    persona_count: usize,
}

impl PromptBuilder {
    /// Create a new prompt builder with the default entity counts
    pub fn new(product_name: impl Into<String>, location: impl Into<String>) -> Self {
        let defaults = AnalyzerConfig::default();
        Self {
            product_name: product_name.into(),
            location: location.into(),
            competitor_count: defaults.competitor_count,
            application_count: defaults.application_count,
            persona_count: defaults.persona_count,
        }
    }

    /// Take the entity counts from a configuration
    pub fn with_config(mut self, config: &AnalyzerConfig) -> Self {
        self.competitor_count = config.competitor_count;
        self.application_count = config.application_count;
        self.persona_count = config.persona_count;
        self
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Role and subject
        prompt.push_str(&format!(
            "You are a market research analyst. Analyze the market for the product \"{}\" in {}.\n\n",
            self.product_name, self.location
        ));

        // 2. Layout rules
        prompt.push_str(FORMAT_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 3. The four sections
        prompt.push_str(&format!(
            "1. Competitors:\nList the top {} competitors. For each one:\n{}\n\n",
            self.competitor_count, COMPETITOR_FIELDS
        ));
        prompt.push_str(&format!(
            "2. Product Applications:\nList {} markets or use cases for the product. For each one:\n{}\n\n",
            self.application_count, APPLICATION_FIELDS
        ));
        prompt.push_str(&format!(
            "3. Customer Personas:\nDescribe {} customer personas. For each one:\n{}\n\n",
            self.persona_count, PERSONA_FIELDS
        ));
        prompt.push_str(&format!(
            "4. Potential Customers:\nList real organizations in {} that fit the personas above, one per line:\n{}\n\n",
            self.location, CUSTOMER_LINE
        ));

        // 4. Closing reminder
        prompt.push_str(OUTPUT_REMINDER);

        prompt
    }
}

const FORMAT_INSTRUCTIONS: &str = r#"Respond with exactly the four numbered sections below, using the section headings verbatim.
Rules:
- Number every item inside a section (1., 2., 3., ...)
- Put each field on its own line as "Label: value"
- Use the labels exactly as written
- Keep figures as you would display them (e.g. "$4.2B", "12% CAGR")"#;

const COMPETITOR_FIELDS: &str = r#"1. Name: <company name>
Description: <what the company does>
Headquarters: <city, country>
Revenue: <annual revenue>"#;

const APPLICATION_FIELDS: &str = r#"1. Name: <application name>
Description: <how the product is used>
Market Size: <current market size>
Growth Rate: <expected annual growth>"#;

const PERSONA_FIELDS: &str = r#"1. Name: <persona title, e.g. "VP of Operations">
Description: <who they are>
Cares Most About: <comma-separated priorities, most important first>
Cares Least About: <what they do not care about>"#;

const CUSTOMER_LINE: &str = "<Role at Organization> - <persona name>: <why they are a fit>";

const OUTPUT_REMINDER: &str =
    "Remember: plain text only, no tables, no extra sections, no commentary before or after the report.";
