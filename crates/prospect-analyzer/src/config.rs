//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum accepted response length (characters)
    pub max_response_length: usize,

    /// Maximum time for a single generation call (seconds)
    pub generation_timeout_secs: u64,

    /// Number of competitors to ask for
    pub competitor_count: usize,

    /// Number of product applications to ask for
    pub application_count: usize,

    /// Number of customer personas to ask for
    pub persona_count: usize,
}

impl AnalyzerConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_response_length == 0 {
            return Err("max_response_length must be greater than 0".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        if self.competitor_count == 0 {
            return Err("competitor_count must be greater than 0".to_string());
        }
        if self.application_count == 0 {
            return Err("application_count must be greater than 0".to_string());
        }
        if self.persona_count == 0 {
            return Err("persona_count must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_response_length: 100_000,
            generation_timeout_secs: 120,
            competitor_count: 5,
            application_count: 5,
            persona_count: 3,
        }
    }
}

impl AnalyzerConfig {
    /// Quick preset: fewer entities and a shorter timeout
    pub fn quick() -> Self {
        Self {
            max_response_length: 50_000,
            generation_timeout_secs: 60,
            competitor_count: 3,
            application_count: 3,
            persona_count: 2,
        }
    }

    /// Thorough preset: more entities and a longer timeout
    pub fn thorough() -> Self {
        Self {
            max_response_length: 200_000,
            generation_timeout_secs: 300,
            competitor_count: 8,
            application_count: 8,
            persona_count: 5,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(AnalyzerConfig::quick().validate().is_ok());
        assert!(AnalyzerConfig::thorough().validate().is_ok());
    }

    #[test]
    fn test_invalid_persona_count() {
        let mut config = AnalyzerConfig::default();
        config.persona_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = AnalyzerConfig::default();
        config.generation_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig::thorough();
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalyzerConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = AnalyzerConfig::from_toml("persona_count = 4").unwrap();
        assert_eq!(parsed.persona_count, 4);
        assert_eq!(parsed.competitor_count, AnalyzerConfig::default().competitor_count);
    }
}
