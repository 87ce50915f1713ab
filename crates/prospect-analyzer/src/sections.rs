//! Splitting a report into its four top-level sections

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// `<ordinal>. <Title>:` at line start, allowing markdown decoration
static RE_SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?mi)^[ \t#*]*\d+\.[ \t]*\**[ \t]*(competitors|product applications|customer personas|potential customers)[ \t]*\**[ \t]*:",
    )
    .expect("section heading pattern is valid")
});

/// The four sections a report is expected to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// "Competitors"
    Competitors,
    /// "Product Applications"
    Applications,
    /// "Customer Personas"
    Personas,
    /// "Potential Customers"
    PotentialCustomers,
}

impl SectionKind {
    /// All section kinds, in the order the prompt asks for them
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Competitors,
        SectionKind::Applications,
        SectionKind::Personas,
        SectionKind::PotentialCustomers,
    ];

    /// Heading title as it appears in the report
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Competitors => "Competitors",
            SectionKind::Applications => "Product Applications",
            SectionKind::Personas => "Customer Personas",
            SectionKind::PotentialCustomers => "Potential Customers",
        }
    }

    fn from_title(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.title().eq_ignore_ascii_case(title))
    }
}

/// The section fragments of one report, borrowed from the response text
///
/// A section absent from the report is the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    /// Competitors fragment
    pub competitors: &'a str,
    /// Product applications fragment
    pub applications: &'a str,
    /// Customer personas fragment
    pub personas: &'a str,
    /// Potential customers fragment
    pub potential_customers: &'a str,
}

impl<'a> Sections<'a> {
    /// Split a report at each section heading
    ///
    /// Every fragment starts at its heading and runs up to the next heading.
    /// Fragments are classified by the title in their heading, so section
    /// order in the text does not matter. The first fragment of a kind wins;
    /// text before the first heading is ignored.
    pub fn split(text: &'a str) -> Self {
        let headings: Vec<(usize, SectionKind)> = RE_SECTION_HEADING
            .captures_iter(text)
            .filter_map(|caps| {
                let start = caps.get(0)?.start();
                let kind = SectionKind::from_title(caps.get(1)?.as_str())?;
                Some((start, kind))
            })
            .collect();

        let mut sections = Sections::default();
        for (idx, &(start, kind)) in headings.iter().enumerate() {
            let end = headings
                .get(idx + 1)
                .map(|&(next, _)| next)
                .unwrap_or(text.len());
            let slot = sections.slot_mut(kind);
            if slot.is_empty() {
                *slot = &text[start..end];
            }
        }

        for kind in SectionKind::ALL {
            if sections.get(kind).is_empty() {
                warn!(section = kind.title(), "Section missing from response");
            }
        }

        sections
    }

    /// Fragment for a section kind
    pub fn get(&self, kind: SectionKind) -> &'a str {
        match kind {
            SectionKind::Competitors => self.competitors,
            SectionKind::Applications => self.applications,
            SectionKind::Personas => self.personas,
            SectionKind::PotentialCustomers => self.potential_customers,
        }
    }

    fn slot_mut(&mut self, kind: SectionKind) -> &mut &'a str {
        match kind {
            SectionKind::Competitors => &mut self.competitors,
            SectionKind::Applications => &mut self.applications,
            SectionKind::Personas => &mut self.personas,
            SectionKind::PotentialCustomers => &mut self.potential_customers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "Here is your analysis.\n\
1. Competitors:\n\
1. Name: Acme\n\
2. Product Applications:\n\
1. Name: Logistics\n\
3. Customer Personas:\n\
1. Name: VP of Sales\n\
4. Potential Customers:\n\
Director at Globex - VP of Sales\n";

    #[test]
    fn test_split_all_sections() {
        let sections = Sections::split(REPORT);
        assert_eq!(sections.competitors, "1. Competitors:\n1. Name: Acme\n");
        assert_eq!(sections.applications, "2. Product Applications:\n1. Name: Logistics\n");
        assert_eq!(sections.personas, "3. Customer Personas:\n1. Name: VP of Sales\n");
        assert_eq!(
            sections.potential_customers,
            "4. Potential Customers:\nDirector at Globex - VP of Sales\n"
        );
    }

    #[test]
    fn test_preamble_is_dropped() {
        let sections = Sections::split(REPORT);
        for kind in SectionKind::ALL {
            assert!(!sections.get(kind).contains("Here is your analysis"));
        }
    }

    #[test]
    fn test_missing_section_is_empty() {
        let text = "1. Competitors:\n1. Name: Acme\n3. Customer Personas:\n1. Name: CTO\n";
        let sections = Sections::split(text);
        assert_eq!(sections.applications, "");
        assert_eq!(sections.potential_customers, "");
        assert!(sections.personas.starts_with("3. Customer Personas:"));
    }

    #[test]
    fn test_order_independent() {
        let text = "1. Customer Personas:\nName: CTO\n2. Competitors:\nName: Acme\n";
        let sections = Sections::split(text);
        assert_eq!(sections.personas, "1. Customer Personas:\nName: CTO\n");
        assert_eq!(sections.competitors, "2. Competitors:\nName: Acme\n");
    }

    #[test]
    fn test_markdown_headings() {
        let text = "## 1. **Competitors:**\n1. Name: Acme\n**2. Product Applications**:\n1. Name: Retail\n";
        let sections = Sections::split(text);
        assert!(sections.competitors.contains("Acme"));
        assert!(sections.applications.contains("Retail"));
    }

    #[test]
    fn test_case_insensitive_heading() {
        let sections = Sections::split("1. COMPETITORS:\n1. Name: Acme\n");
        assert!(sections.competitors.contains("Acme"));
    }

    #[test]
    fn test_title_mid_line_is_not_a_heading() {
        let text = "1. Competitors:\nDescription: outsells 2. Competitors: nobody\n";
        let sections = Sections::split(text);
        assert_eq!(sections.competitors, text);
    }

    #[test]
    fn test_first_duplicate_section_wins() {
        let text = "1. Competitors:\nName: First\n2. Competitors:\nName: Second\n";
        let sections = Sections::split(text);
        assert_eq!(sections.competitors, "1. Competitors:\nName: First\n");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(Sections::split(""), Sections::default());
    }
}
