//! Runtime configuration.
//!
//! Loaded from an optional YAML file and `INTEROP__*` environment variables.

use serde::Deserialize;

use crate::error::InteropResult;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "interop.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "INTEROP_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "INTEROP";
/// Environment variable for a tracing filter directive.
pub const LOG_ENV_VAR: &str = "INTEROP_LOG";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Tracing filter directive, overridden by `INTEROP_LOG`.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Plain,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InteropConfig {
    pub log: LogConfig,
}

impl InteropConfig {
    /// Load configuration from file and environment.
    ///
    /// Sources, later overriding earlier:
    /// 1. `interop.yaml` in the current directory (if exists)
    /// 2. File given by `path` (if provided)
    /// 3. File named by `INTEROP_CONFIG` (if set)
    /// 4. `INTEROP__*` environment variables, e.g. `INTEROP__LOG__FORMAT=json`
    pub fn load(path: Option<&str>) -> InteropResult<Self> {
        use ::config::{Config, Environment, File, FileFormat};

        let mut builder = Config::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = InteropConfig::default();
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.log.format, LogFormat::Plain);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "log:\n  filter: debug\n  format: json").unwrap();

        let config = InteropConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.log.filter, "debug");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "log:\n  format: json").unwrap();

        let config = InteropConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_load_missing_required_file() {
        assert!(InteropConfig::load(Some("/nonexistent/interop.yaml")).is_err());
    }
}
