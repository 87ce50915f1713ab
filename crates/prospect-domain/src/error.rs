//! Construction errors for domain entities

use std::fmt;

/// A required field was absent or blank when building an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField {
    /// Entity kind being built (e.g. "competitor")
    pub entity: &'static str,
    /// Name of the missing field
    pub field: &'static str,
}

impl MissingField {
    /// Create a new missing-field error
    pub fn new(entity: &'static str, field: &'static str) -> Self {
        Self { entity, field }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is missing required field '{}'", self.entity, self.field)
    }
}

impl std::error::Error for MissingField {}

/// Trim a field value, rejecting it if nothing is left
pub(crate) fn require(
    entity: &'static str,
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, MissingField> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MissingField::new(entity, field));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}
