//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables,
//! and command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given. Missing is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "repayment.toml";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "REPAYMENT_LOG_LEVEL";

/// Environment variable overriding the output format
pub const ENV_FORMAT: &str = "REPAYMENT_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, plain")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Every level, most verbose first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Directive passed to the tracing `EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Case-insensitive match against [`LogLevel::as_filter_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_filter_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// How a computed repayment is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed table with inputs and derived values
    #[default]
    Table,
    /// Pretty-printed JSON object
    Json,
    /// Single `$<amount> <Label>` line
    Plain,
}

impl OutputFormat {
    /// Every format, default first
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Table,
        OutputFormat::Json,
        OutputFormat::Plain,
    ];

    /// Name accepted on the command line and in the config file
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Plain => "plain",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidFormat(s.to_string()))
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Default output format for `compute`
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply overrides from an environment lookup.
    ///
    /// `lookup` returns the value of a variable if it is set; pass
    /// `|key| std::env::var(key).ok()` for the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }
}

/// CLI arguments that influence configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path given with `--config`
    pub config_file: Option<PathBuf>,
    /// `--verbose` flag
    pub verbose: bool,
    /// `--format` override
    pub format: Option<OutputFormat>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config<F>(cli: &CliArgs, env_lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(env_lookup)?;
    config.merge_with_cli(cli);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("plain").unwrap(), OutputFormat::Plain);

        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_str(&level.to_string()).unwrap(), level);
            assert_eq!(
                LogLevel::from_str(&level.as_filter_str().to_uppercase()).unwrap(),
                level
            );
        }
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_str(format.name()).unwrap(), format);
        }
    }

    #[test]
    fn test_toml_names_match_from_str_names() {
        for level in LogLevel::ALL {
            let toml_str = format!("log_level = \"{}\"", level.as_filter_str());
            let config: CliConfig = toml::from_str(&toml_str).unwrap();
            assert_eq!(config.log_level, level);
        }
        for format in OutputFormat::ALL {
            let toml_str = format!("format = \"{}\"", format.name());
            let config: CliConfig = toml::from_str(&toml_str).unwrap();
            assert_eq!(config.format, format);
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
        assert_eq!(format!("{}", OutputFormat::Json), "json");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            format = "json"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str(r#"format = "plain""#).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Plain);
    }

    #[test]
    fn test_invalid_toml_value() {
        let result: Result<CliConfig, _> = toml::from_str(r#"log_level = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_LOG_LEVEL, "error"), (ENV_FORMAT, "plain")]);

        let mut config = CliConfig::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.format, OutputFormat::Plain);
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = CliConfig::default();
        let result = config.apply_env(|key| (key == ENV_FORMAT).then(|| "yaml".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            config_file: None,
            verbose: true,
            format: Some(OutputFormat::Json),
        };

        config.merge_with_cli(&cli);

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_build_config_from_file_env_and_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"info\"\nformat = \"json\"").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            verbose: false,
            format: None,
        };
        let config = build_config(&cli, no_env).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Json);

        let config = build_config(&cli, |key| {
            (key == ENV_LOG_LEVEL).then(|| "trace".to_string())
        })
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);

        let cli = CliArgs {
            format: Some(OutputFormat::Plain),
            ..cli
        };
        let config = build_config(&cli, no_env).unwrap();
        assert_eq!(config.format, OutputFormat::Plain);
    }

    #[test]
    fn test_build_config_missing_explicit_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/repayment.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&cli, no_env),
            Err(ConfigError::FileError(_))
        ));
    }
}
