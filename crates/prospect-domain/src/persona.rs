//! Customer persona entity
//!
//! A persona is built in three steps, each producing a new value:
//!
//! ```text
//! CustomerPersona::new → with_potential_customers → with_templates
//! ```

use crate::error::{require, MissingField};

/// The two outreach templates rendered for a persona
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplates {
    /// Outreach (sales) email
    pub sales: String,
    /// Discovery (customer research) email
    pub discovery: String,
}

/// A buyer archetype for the analyzed product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerPersona {
    name: String,
    description: String,
    cares_most_about: String,
    cares_least_about: String,
    potential_customers: Vec<String>,
    sales_email: Option<String>,
    discovery_email: Option<String>,
}

impl CustomerPersona {
    /// Entity kind used in error messages and logs
    pub const KIND: &'static str = "persona";

    /// Build a base persona, rejecting blank fields
    ///
    /// The persona starts with no potential customers and no templates.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cares_most_about: impl Into<String>,
        cares_least_about: impl Into<String>,
    ) -> Result<Self, MissingField> {
        Ok(Self {
            name: require(Self::KIND, "name", name)?,
            description: require(Self::KIND, "description", description)?,
            cares_most_about: require(Self::KIND, "cares most about", cares_most_about)?,
            cares_least_about: require(Self::KIND, "cares least about", cares_least_about)?,
            potential_customers: Vec::new(),
            sales_email: None,
            discovery_email: None,
        })
    }

    /// Replace the potential customer list
    pub fn with_potential_customers(mut self, customers: Vec<String>) -> Self {
        self.potential_customers = customers;
        self
    }

    /// Attach both email templates
    pub fn with_templates(mut self, templates: EmailTemplates) -> Self {
        self.sales_email = Some(templates.sales);
        self.discovery_email = Some(templates.discovery);
        self
    }

    /// Persona name, e.g. "VP of Sales"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Who this persona is
    pub fn description(&self) -> &str {
        &self.description
    }

    /// What the persona cares most about
    pub fn cares_most_about(&self) -> &str {
        &self.cares_most_about
    }

    /// What the persona cares least about
    pub fn cares_least_about(&self) -> &str {
        &self.cares_least_about
    }

    /// The first comma-separated item of `cares_most_about`, untrimmed
    ///
    /// ```
    /// use prospect_domain::CustomerPersona;
    ///
    /// let p = CustomerPersona::new("CFO", "Finance lead", "cost, risk", "branding").unwrap();
    /// assert_eq!(p.primary_concern(), "cost");
    /// ```
    pub fn primary_concern(&self) -> &str {
        self.cares_most_about
            .split(',')
            .next()
            .unwrap_or_default()
    }

    /// Customers from the report that mention this persona, in report order
    pub fn potential_customers(&self) -> &[String] {
        &self.potential_customers
    }

    /// Rendered outreach email, if templates were attached
    pub fn sales_email(&self) -> Option<&str> {
        self.sales_email.as_deref()
    }

    /// Rendered discovery email, if templates were attached
    pub fn discovery_email(&self) -> Option<&str> {
        self.discovery_email.as_deref()
    }
}
