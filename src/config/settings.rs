//! Configuration settings for the river crossing CNF encoder

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub encoding: EncodingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Number of crossings in the plan (K)
    pub steps: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub create_parent_dirs: bool,
    #[serde(default)]
    pub statistics_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            encoding: EncodingConfig { steps: 7 },
            output: OutputConfig {
                path: PathBuf::from("output/river_crossing.cnf"),
                create_parent_dirs: true,
                statistics_file: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.encoding.steps == 0 {
            anyhow::bail!("Step bound must be positive");
        }

        if self.output.path.as_os_str().is_empty() {
            anyhow::bail!("Output path must not be empty");
        }

        if self.output.statistics_file.as_ref() == Some(&self.output.path) {
            anyhow::bail!("Statistics file would overwrite the CNF output: {}", self.output.path.display());
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(steps) = cli_overrides.steps {
            self.encoding.steps = steps;
        }
        if let Some(ref path) = cli_overrides.output_path {
            self.output.path = path.clone();
        }
        if let Some(ref stats) = cli_overrides.statistics_file {
            self.output.statistics_file = Some(stats.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub steps: Option<usize>,
    pub output_path: Option<PathBuf>,
    pub statistics_file: Option<PathBuf>,
}
