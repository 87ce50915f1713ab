//! Competitor entity

use crate::error::{require, MissingField};

/// A company competing with the analyzed product
///
/// Immutable once built. Revenue is kept as display text; the upstream
/// report is not numerically reliable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    name: String,
    description: String,
    headquarters: String,
    revenue: String,
}

impl Competitor {
    /// Entity kind used in error messages and logs
    pub const KIND: &'static str = "competitor";

    /// Build a competitor, rejecting blank fields
    ///
    /// # Examples
    ///
    /// ```
    /// use prospect_domain::Competitor;
    ///
    /// let acme = Competitor::new("Acme", "Widgets", "Berlin", "$10B").unwrap();
    /// assert_eq!(acme.name(), "Acme");
    ///
    /// assert!(Competitor::new("Acme", "Widgets", " ", "$10B").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        headquarters: impl Into<String>,
        revenue: impl Into<String>,
    ) -> Result<Self, MissingField> {
        Ok(Self {
            name: require(Self::KIND, "name", name)?,
            description: require(Self::KIND, "description", description)?,
            headquarters: require(Self::KIND, "headquarters", headquarters)?,
            revenue: require(Self::KIND, "revenue", revenue)?,
        })
    }

    /// Company name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short description of what the company does
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Headquarters location
    pub fn headquarters(&self) -> &str {
        &self.headquarters
    }

    /// Revenue, verbatim from the report
    pub fn revenue(&self) -> &str {
        &self.revenue
    }
}
