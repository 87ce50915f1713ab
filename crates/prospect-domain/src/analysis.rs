//! The result of one market analysis

use crate::{Application, Competitor, CustomerPersona};

/// Everything extracted from one generated report
///
/// The prompt and raw response are kept verbatim so that a surprising
/// extraction can be traced back to the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Competitors, in report order
    pub competitors: Vec<Competitor>,

    /// Product applications, in report order
    pub applications: Vec<Application>,

    /// Customer personas with potential customers and templates attached
    pub personas: Vec<CustomerPersona>,

    /// Prompt sent to the text-generation service
    pub prompt: String,

    /// Unmodified response text
    pub raw_response: String,
}

impl AnalysisResult {
    /// Total number of entities across all three lists
    pub fn entity_count(&self) -> usize {
        self.competitors.len() + self.applications.len() + self.personas.len()
    }

    /// True when nothing could be extracted from the response
    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = AnalysisResult {
            competitors: Vec::new(),
            applications: Vec::new(),
            personas: Vec::new(),
            prompt: "prompt".to_string(),
            raw_response: "response".to_string(),
        };
        assert!(result.is_empty());
        assert_eq!(result.entity_count(), 0);
    }

    #[test]
    fn test_entity_count() {
        let result = AnalysisResult {
            competitors: vec![Competitor::new("Acme", "Widgets", "Berlin", "$1B").unwrap()],
            applications: Vec::new(),
            personas: vec![CustomerPersona::new("CTO", "Tech lead", "uptime", "price").unwrap()],
            prompt: String::new(),
            raw_response: String::new(),
        };
        assert_eq!(result.entity_count(), 2);
        assert!(!result.is_empty());
    }
}
