//! Request types for analysis

/// Request to analyze the market for a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Product being analyzed; substituted into the email templates
    pub product_name: String,

    /// Market the analysis targets; only used to build the prompt
    pub location: String,
}

impl AnalysisRequest {
    /// Create a new request
    pub fn new(product_name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            location: location.into(),
        }
    }
}
