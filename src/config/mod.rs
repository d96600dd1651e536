//! Configuration loading for Commit Guardian
//!
//! The host linter's configuration file decides which rules run. Rules are
//! keyed by their short code ("SD1") or their name ("issue-tracker-reference");
//! rules absent from the file stay enabled.

use crate::domain::{LintError, LintResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main configuration structure for Commit Guardian
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,
    /// Per-rule settings, keyed by rule code or name
    #[serde(default)]
    pub rules: HashMap<String, RuleSettings>,
}

/// Settings for an individual rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Whether this rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_version() -> String {
    "1.0".to_string()
}

impl LinterConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LintResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            LintError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            LintError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> LintResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| LintError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Default configuration: all built-in rules enabled
    pub fn with_defaults() -> Self {
        Self {
            version: default_version(),
            rules: HashMap::new(),
        }
    }

    /// Whether the rule with the given code and name is enabled
    ///
    /// A rule may be addressed by either key; an explicit setting under
    /// either one wins over the enabled-by-default fallback.
    pub fn is_enabled(&self, code: &str, name: &str) -> bool {
        self.rules
            .get(code)
            .or_else(|| self.rules.get(name))
            .map(|settings| settings.enabled)
            .unwrap_or(true)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> LintResult<()> {
        if self.version != "1.0" {
            return Err(LintError::config(format!(
                "Unsupported config version '{}', expected '1.0'",
                self.version
            )));
        }
        Ok(())
    }
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}
