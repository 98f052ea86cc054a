//! Configuration file handling for bJin projects.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up by [`Config::find`].
pub const CONFIG_FILE: &str = "bjin.toml";

/// Represents the bjin.toml configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub package: Package,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    #[serde(default = "default_edition")]
    pub edition: String,
}

/// The `[analysis]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Load the standard library catalog into the outermost scope.
    #[serde(default = "default_prelude")]
    pub prelude: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            prelude: default_prelude(),
        }
    }
}

fn default_edition() -> String {
    "2023".to_string()
}

fn default_prelude() -> bool {
    true
}

impl Config {
    /// Creates a new default configuration with the given project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            package: Package {
                name: name.into(),
                version: "0.1.0".to_string(),
                edition: default_edition(),
            },
            analysis: AnalysisConfig::default(),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid bjin.toml.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).with_context(|| format!("Failed to parse {CONFIG_FILE}"))
    }

    /// Loads configuration from a bjin.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&contents)
    }

    /// Saves configuration to a bjin.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds bjin.toml in `start` or the nearest ancestor directory.
    ///
    /// Returns the configuration together with the directory containing it.
    ///
    /// # Errors
    /// Returns an error if no bjin.toml exists on the path to the root.
    pub fn find_from(start: impl AsRef<Path>) -> Result<(Self, PathBuf)> {
        let mut current_dir = start.as_ref().to_path_buf();

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok((config, current_dir));
            }

            if !current_dir.pop() {
                anyhow::bail!(
                    "Could not find {CONFIG_FILE} in {} or any parent directory",
                    start.as_ref().display()
                );
            }
        }
    }

    /// Finds bjin.toml starting from the current directory.
    ///
    /// # Errors
    /// Returns an error if the current directory is unavailable or no
    /// bjin.toml is found.
    pub fn find() -> Result<(Self, PathBuf)> {
        let current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;
        Self::find_from(current_dir)
    }
}
