//! Configuration types for otuvec

use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::OtuError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub groups: GroupsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupsConfig {
    /// Groups to return from the all-groups derivation. Empty or `"all"` selects every group.
    #[serde(default = "default_selected_groups")]
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Line format of the shared batch output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `label\tgroup\tnum_bins\tc_0...`
    Shared,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `OTUVEC_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

// Default value functions
fn default_selected_groups() -> Vec<String> { Vec::new() }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> LogFormat { LogFormat::Text }
fn default_output_format() -> OutputFormat { OutputFormat::Shared }

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            selected: default_selected_groups(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, OtuError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| OtuError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), OtuError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| OtuError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.groups.selected.is_empty());
        assert_eq!(config.output.format, OutputFormat::Shared);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_load_valid_config() {
        let toml_content = r#"
[groups]
selected = ["forest", "soil"]

[logging]
level = "debug"
format = "json"

[output]
format = "json"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.groups.selected, vec!["forest", "soil"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_partial_config() {
        let toml_content = r#"
[groups]
selected = ["all"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.groups.selected, vec!["all"]);
        // Default values for unspecified sections
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.output.format, OutputFormat::Shared);
    }

    #[test]
    fn test_load_unknown_output_format() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[output]\nformat = \"csv\"\n").unwrap();

        assert!(matches!(
            load_config(temp_file.path()),
            Err(OtuError::Configuration(_))
        ));
    }

    #[test]
    fn test_load_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "this is not valid TOML {{").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            OtuError::Configuration(msg) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_reload() {
        let mut config = Config::default();
        config.groups.selected = vec!["lake".to_string()];
        config.logging.format = LogFormat::Json;

        let temp_file = NamedTempFile::new().unwrap();
        save_config(temp_file.path(), &config).unwrap();

        let loaded = load_config(temp_file.path()).unwrap();
        assert_eq!(loaded.groups.selected, vec!["lake"]);
        assert_eq!(loaded.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/otuvec/config.toml");
        assert!(matches!(result, Err(OtuError::Io(_))));
    }
}
