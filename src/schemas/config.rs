//! Config schema - Configuration for jobtrack

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::default_stages;
use crate::sankey::default_colors;

/// A personal link shown alongside the tracker (job boards, resume, etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalLink {
    /// Display label
    pub label: String,

    /// Destination URL
    pub url: String,
}

/// Main configuration for jobtrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ordered status vocabulary; the first entry is the "Start" sentinel
    #[serde(default = "default_stages")]
    pub stages: Vec<String>,

    /// Status name to hex color for the flow diagram
    #[serde(default = "default_colors")]
    pub colors: BTreeMap<String, String>,

    /// Personal links
    #[serde(default)]
    pub links: Vec<PersonalLink>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            stages: default_stages(),
            colors: default_colors(),
            links: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::START_STATUS;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.stages[0], START_STATUS);
        assert_eq!(config.stages.len(), 10);
        assert!(config.links.is_empty());
        // Every canonical stage carries a color
        for stage in &config.stages {
            assert!(config.colors.contains_key(stage), "missing color for {}", stage);
        }
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = Config::default();
        config.links.push(PersonalLink {
            label: "Resume".to_string(),
            url: "https://example.com/resume.pdf".to_string(),
        });

        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_partial_json() {
        // Simulate a config file with only some fields set
        let json = r#"{"links": [{"label": "LinkedIn", "url": "https://linkedin.com/in/me"}]}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.links.len(), 1);
        assert_eq!(parsed.links[0].label, "LinkedIn");
        // Other fields should have defaults
        assert_eq!(parsed.stages, default_stages());
        assert_eq!(parsed.colors, default_colors());
    }

    #[test]
    fn test_config_custom_stages() {
        let json = r#"{"stages": ["Start", "Applied", "Offer"]}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.stages, vec!["Start", "Applied", "Offer"]);
        // Colors keep defaults independently of the trimmed vocabulary
        assert!(parsed.colors.contains_key("Rejected"));
    }
}
