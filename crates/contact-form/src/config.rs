// File: src/config.rs
// Purpose: Configuration parsing from contact-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::validation::{ContactRules, FIRST_NAME_MIN_LENGTH};
use crate::view::ViewOptions;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "contact-form.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub rules: RulesConfig,
}

/// Text shown by the rendered form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

/// Validation rule parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Minimum number of characters in the first name (default: 5)
    #[serde(default = "default_first_name_min_length")]
    pub first_name_min_length: usize,
}

// Default values
fn default_title() -> String {
    "Contact Form".to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

fn default_first_name_min_length() -> usize {
    FIRST_NAME_MIN_LENGTH
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            submit_label: default_submit_label(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            first_name_min_length: default_first_name_min_length(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./contact-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    pub fn rules(&self) -> ContactRules {
        ContactRules::new(self.rules.first_name_min_length)
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            title: self.form.title.clone(),
            submit_label: self.form.submit_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.form.title, "Contact Form");
        assert_eq!(config.form.submit_label, "Submit");
        assert_eq!(config.rules(), ContactRules::default());
        assert_eq!(config.view_options(), ViewOptions::default());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.rules.first_name_min_length, 5);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [rules]
            first_name_min_length = 2
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.rules().first_name_min_length, 2);
        assert_eq!(config.form.title, "Contact Form");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/contact-form.toml").unwrap();
        assert_eq!(config.rules.first_name_min_length, 5);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let path = std::env::temp_dir().join(format!(
            "contact-form-invalid-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[rules]\nfirst_name_min_length = \"five\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
