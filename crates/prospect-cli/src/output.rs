//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use prospect_domain::{AnalysisResult, Application, Competitor, CustomerPersona};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis result.
    ///
    /// `show_emails` only affects the table format; JSON always carries the
    /// templates.
    pub fn format_result(&self, result: &AnalysisResult, show_emails: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_result_json(result),
            OutputFormat::Table => Ok(self.format_result_table(result, show_emails)),
            OutputFormat::Quiet => Ok(self.format_result_quiet(result)),
        }
    }

    fn format_result_json(&self, result: &AnalysisResult) -> Result<String> {
        let competitors: Vec<serde_json::Value> = result
            .competitors
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.name(),
                    "description": c.description(),
                    "headquarters": c.headquarters(),
                    "revenue": c.revenue(),
                })
            })
            .collect();

        let applications: Vec<serde_json::Value> = result
            .applications
            .iter()
            .map(|a| {
                serde_json::json!({
                    "name": a.name(),
                    "description": a.description(),
                    "market_size": a.market_size(),
                    "growth_rate": a.growth_rate(),
                })
            })
            .collect();

        let personas: Vec<serde_json::Value> = result
            .personas
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name(),
                    "description": p.description(),
                    "cares_most_about": p.cares_most_about(),
                    "cares_least_about": p.cares_least_about(),
                    "potential_customers": p.potential_customers(),
                    "sales_email": p.sales_email(),
                    "discovery_email": p.discovery_email(),
                })
            })
            .collect();

        let output = serde_json::json!({
            "competitors": competitors,
            "applications": applications,
            "personas": personas,
            "prompt": result.prompt,
            "raw_response": result.raw_response,
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_result_table(&self, result: &AnalysisResult, show_emails: bool) -> String {
        if result.is_empty() {
            return self.warning("No competitors, applications or personas found in the report.");
        }

        let mut sections = vec![
            self.section("Competitors", competitor_table(&result.competitors)),
            self.section("Product Applications", application_table(&result.applications)),
            self.section("Customer Personas", persona_table(&result.personas)),
        ];

        if show_emails {
            sections.extend(result.personas.iter().map(|p| self.persona_emails(p)));
        }

        sections.join("\n\n")
    }

    /// Entity names, one per line, grouped by kind.
    fn format_result_quiet(&self, result: &AnalysisResult) -> String {
        result
            .competitors
            .iter()
            .map(Competitor::name)
            .chain(result.applications.iter().map(Application::name))
            .chain(result.personas.iter().map(CustomerPersona::name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn section(&self, title: &str, body: Option<String>) -> String {
        let heading = self.colorize(title, "cyan");
        match body {
            Some(table) => format!("{}\n{}", heading, table),
            None => format!("{}\n{}", heading, self.colorize("  (none)", "yellow")),
        }
    }

    fn persona_emails(&self, persona: &CustomerPersona) -> String {
        let heading = self.colorize(&format!("Emails for {}", persona.name()), "magenta");
        format!(
            "{}\n--- Sales ---\n{}\n\n--- Discovery ---\n{}",
            heading,
            persona.sales_email().unwrap_or_default(),
            persona.discovery_email().unwrap_or_default()
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn competitor_table(competitors: &[Competitor]) -> Option<String> {
    render_table(
        ["Name", "Description", "Headquarters", "Revenue"],
        competitors
            .iter()
            .map(|c| [c.name(), c.description(), c.headquarters(), c.revenue()].map(String::from)),
    )
}

fn application_table(applications: &[Application]) -> Option<String> {
    render_table(
        ["Name", "Description", "Market Size", "Growth Rate"],
        applications.iter().map(|a| {
            [a.name(), a.description(), a.market_size(), a.growth_rate()].map(String::from)
        }),
    )
}

fn persona_table(personas: &[CustomerPersona]) -> Option<String> {
    render_table(
        ["Name", "Cares Most About", "Cares Least About", "Potential Customers"],
        personas.iter().map(|p| {
            [
                p.name().to_string(),
                p.cares_most_about().to_string(),
                p.cares_least_about().to_string(),
                p.potential_customers().join("\n"),
            ]
        }),
    )
}

/// `None` when there are no rows.
fn render_table<const N: usize>(
    header: [&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> Option<String> {
    let mut builder = Builder::default();
    builder.push_record(header);

    let mut count = 0;
    for row in rows {
        builder.push_record(row);
        count += 1;
    }
    if count == 0 {
        return None;
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    Some(table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospect_domain::EmailTemplates;

    fn create_test_result() -> AnalysisResult {
        let persona = CustomerPersona::new(
            "Store Manager",
            "Runs a single location",
            "availability, labor",
            "dashboards",
        )
        .unwrap()
        .with_potential_customers(vec!["Regional lead at Rewe".to_string()])
        .with_templates(EmailTemplates {
            sales: "Subject: How ShelfSense helps".to_string(),
            discovery: "Subject: Learning how".to_string(),
        });

        AnalysisResult {
            competitors: vec![Competitor::new("Acme", "Automation", "Boston", "$1B").unwrap()],
            applications: vec![Application::new("Grocery", "Out-of-stock", "$3B", "14%").unwrap()],
            personas: vec![persona],
            prompt: "the prompt".to_string(),
            raw_response: "the response".to_string(),
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_result(&create_test_result(), false).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["competitors"][0]["headquarters"], "Boston");
        assert_eq!(value["applications"][0]["growth_rate"], "14%");
        assert_eq!(value["personas"][0]["potential_customers"][0], "Regional lead at Rewe");
        assert_eq!(value["personas"][0]["sales_email"], "Subject: How ShelfSense helps");
        assert_eq!(value["prompt"], "the prompt");
        assert_eq!(value["raw_response"], "the response");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_result(&create_test_result(), true).unwrap();
        assert_eq!(output, "Acme\nGrocery\nStore Manager");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(&create_test_result(), false).unwrap();
        assert!(output.contains("Competitors"));
        assert!(output.contains("Headquarters"));
        assert!(output.contains("Market Size"));
        assert!(output.contains("Regional lead at Rewe"));
        assert!(!output.contains("--- Sales ---"));
    }

    #[test]
    fn test_table_with_emails() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(&create_test_result(), true).unwrap();
        assert!(output.contains("Emails for Store Manager"));
        assert!(output.contains("Subject: How ShelfSense helps"));
        assert!(output.contains("Subject: Learning how"));
    }

    #[test]
    fn test_table_marks_empty_section() {
        let mut result = create_test_result();
        result.applications.clear();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(&result, false).unwrap();
        assert!(output.contains("Product Applications\n  (none)"));
    }

    #[test]
    fn test_empty_result() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = AnalysisResult {
            competitors: vec![],
            applications: vec![],
            personas: vec![],
            prompt: String::new(),
            raw_response: String::new(),
        };
        let output = formatter.format_result(&result, false).unwrap();
        assert!(output.contains("No competitors"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
