//! Configuration for stack generation and the scheduled sweep.

use serde::{Deserialize, Serialize};

/// Top-level generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Shown in every description as "As of <label>, ..."
    pub as_of_label: String,
    /// Default cap when a caller does not specify one
    pub default_max_compounds: usize,
    /// Sweep configuration
    pub sweep: SweepConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            as_of_label: "February 2026".to_string(),
            default_max_compounds: 6,
            sweep: SweepConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Scheduled sweep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Creator recorded on persisted stacks; part of the lookup key
    pub creator: String,
    /// Minimum composite score change that triggers an update
    pub score_change_threshold: f64,
    pub max_compounds: usize,
    /// Constraint tokens applied to every cell
    pub constraints: Vec<String>,
    pub selection_offset: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            creator: "system".to_string(),
            score_change_threshold: 0.5,
            max_compounds: 6,
            constraints: vec![],
            selection_offset: 0,
        }
    }
}
