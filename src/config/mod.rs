//! Configuration system for fieldquill.
//!
//! This module provides the configuration structure for fieldquill with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use fieldquill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.indent_size, 4);
//! assert_eq!(config.extract_indent_size, 2);
//!
//! // Create custom configuration
//! let custom = Config {
//!     indent_size: 2,
//!     ..Config::default()
//! };
//! assert_eq!(custom.max_array_extension, None);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for fieldquill.
///
/// # Fields
///
/// * `indent_size` - Spaces per level when writing edited documents (default: 4)
/// * `extract_indent_size` - Spaces per level for the JSON view of an extracted field (default: 2)
/// * `max_array_extension` - Most elements a single index may pad onto an array (default: unlimited)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Spaces per indentation level for edited documents
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Spaces per indentation level for extracted values
    #[serde(default = "default_extract_indent_size")]
    pub extract_indent_size: usize,

    /// Upper bound on empty objects added to reach an out-of-range index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_array_extension: Option<usize>,
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    4
}

/// Returns the default indentation size for extracted values.
fn default_extract_indent_size() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            extract_indent_size: default_extract_indent_size(),
            max_array_extension: None,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/fieldquill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("fieldquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring malformed config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
