//! Region Graph
//!
//! Structural analysis of country-border graphs:
//! - Region files (countries, capitals, neighbor ISO codes) loaded from JSON
//! - Border graph built on petgraph with capital-to-capital distances
//! - Metrics engine: components, distances, clique, coloring estimate,
//!   Eulerian and Hamiltonian subgraph heuristics
//! - Text and JSON reports

pub mod graph;
pub mod region;

#[cfg(test)]
pub(crate) mod test_helpers;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use graph::AnalysisConfig;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputYamlConfig,
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputYamlConfig {
    pub format: OutputFormat,
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

// ============================================================================
// Resolved configuration
// ============================================================================

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables only.
    /// Equivalent to from_yaml_and_env(None).
    pub fn from_env() -> Result<Self> {
        Self::from_yaml_and_env(None)
    }

    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "region-graph.yaml" in CWD. A missing or
    /// unreadable file falls back to env vars / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        // 1. Load YAML config (or defaults if file not found)
        let yaml = Self::load_yaml(yaml_path);

        // 2. Build Config with env var overrides
        Ok(Self {
            analysis: AnalysisConfig {
                hamiltonian_step_limit: std::env::var("REGION_GRAPH_HAMILTONIAN_STEP_LIMIT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(yaml.analysis.hamiltonian_step_limit),
                hamiltonian_max_subset: std::env::var("REGION_GRAPH_HAMILTONIAN_MAX_SUBSET")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(yaml.analysis.hamiltonian_max_subset),
            },
            output_format: std::env::var("REGION_GRAPH_OUTPUT_FORMAT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(yaml.output.format),
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("region-graph.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }
}
