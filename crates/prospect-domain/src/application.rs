//! Product application entity

use crate::error::{require, MissingField};

/// A market or use case the analyzed product can be applied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    name: String,
    description: String,
    market_size: String,
    growth_rate: String,
}

impl Application {
    /// Entity kind used in error messages and logs
    pub const KIND: &'static str = "application";

    /// Build an application, rejecting blank fields
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        market_size: impl Into<String>,
        growth_rate: impl Into<String>,
    ) -> Result<Self, MissingField> {
        Ok(Self {
            name: require(Self::KIND, "name", name)?,
            description: require(Self::KIND, "description", description)?,
            market_size: require(Self::KIND, "market size", market_size)?,
            growth_rate: require(Self::KIND, "growth rate", growth_rate)?,
        })
    }

    /// Application name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What the application is
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Market size, verbatim from the report
    pub fn market_size(&self) -> &str {
        &self.market_size
    }

    /// Growth rate, verbatim from the report
    pub fn growth_rate(&self) -> &str {
        &self.growth_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_keeps_display_text() {
        let app = Application::new("Logistics", "Fleet tracking", "$4.2B", "12% CAGR").unwrap();
        assert_eq!(app.market_size(), "$4.2B");
        assert_eq!(app.growth_rate(), "12% CAGR");
    }

    #[test]
    fn test_application_blank_growth_rate() {
        let err = Application::new("Logistics", "Fleet tracking", "$4.2B", "\t").unwrap_err();
        assert_eq!(err.field, "growth rate");
    }
}
