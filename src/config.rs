//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then a YAML config file, then
//! environment variables, then command-line overrides applied by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::services::record_table::{FieldCodec, Segment};
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATA_DIR, ENV_DATA_DIR, ENV_STRICT};
use crate::{Error, Result};

/// Toolkit configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the problem-set input files
    pub data_dir: PathBuf,

    /// Stop at the first malformed line with an error (otherwise grade what parsed)
    pub strict_parsing: bool,

    /// Write columns that still hold their default value
    pub write_default_values: bool,

    /// Show a progress bar for large problem sets
    pub show_progress: bool,

    /// Comment lines written at the top of results files
    pub results_comment: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            strict_parsing: true,
            write_default_values: false,
            show_progress: true,
            results_comment: None,
        }
    }
}

impl Config {
    /// `~/.config/problem-set/config.yaml` (platform config directory)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a YAML config file; missing keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file '{}'", path.display()), e))?;
        serde_yaml::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file '{}': {}", path.display(), e))
        })
    }

    /// Defaults, then `config_file` if given, then environment variables
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        debug!("Layered configuration: {:?}", config);
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir.trim());
        }

        if let Some(value) = lookup(ENV_STRICT) {
            self.strict_parsing = parse_flag(&value).ok_or_else(|| {
                Error::configuration(format!("{} must be yes/no or true/false, got '{}'", ENV_STRICT, value))
            })?;
        }

        Ok(())
    }

    /// Resolve a problem-set input file against the data directory
    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(Error::configuration("Data directory cannot be empty"));
        }

        if let Some(comment) = &self.results_comment {
            if comment.lines().any(|line| !line.trim_start().starts_with('#')) {
                return Err(Error::configuration(
                    "Every line of results_comment must start with '#'",
                ));
            }
        }

        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Flags use the boolean column spellings
fn parse_flag(value: &str) -> Option<bool> {
    <bool as FieldCodec>::parse(Segment::new(value)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.strict_parsing);
        assert!(!config.write_default_values);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_dir: /tmp/sets\nwrite_default_values: true").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/sets"));
        assert!(config.write_default_values);
        assert!(config.strict_parsing);
    }

    #[test]
    fn test_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "strict_parsing: [not, a, bool]").unwrap();

        let error = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(error, Error::Configuration { .. }));
    }

    #[test]
    fn test_missing_config_file() {
        let error = Config::load_layered(Some(Path::new("/nonexistent/config.yaml"))).unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[("PROBLEM_SET_DATA_DIR", "sets"), ("PROBLEM_SET_STRICT", "No")]))
            .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("sets"));
        assert!(!config.strict_parsing);

        let error = config
            .apply_env(env(&[("PROBLEM_SET_STRICT", "maybe")]))
            .unwrap_err();
        assert!(error.to_string().contains("PROBLEM_SET_STRICT"));
    }

    #[test]
    fn test_flag_spellings_match_boolean_columns() {
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("1"), None);
        assert_eq!(parse_flag("0"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_validate_results_comment() {
        let mut config = Config {
            results_comment: Some("# graded\n# by problem-set".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.results_comment = Some("# ok\nnot a comment".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            results_comment: Some("# c".to_string()),
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_input_path() {
        let config = Config::default();
        assert_eq!(config.input_path("intervals.in"), PathBuf::from("data/intervals.in"));
    }
}
