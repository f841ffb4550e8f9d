//! Statistics configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use actstat_utils::LogFormat;

use crate::StatsError;

/// Which lock layout backs an [`ActionStatistics`](crate::ActionStatistics).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockStrategy {
    /// One lock over every action; snapshots are consistent across actions.
    #[default]
    Global,
    /// One lock per action; writers on different actions run in parallel.
    PerAction,
}

/// Configuration for [`ActionStatistics`](crate::ActionStatistics).
///
/// Can be loaded from a TOML file via [`StatsConfig::from_toml_file`] or
/// built programmatically. Every field has a default, so an empty document
/// is valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub lock_strategy: LockStrategy,

    /// Number of distinct actions to reserve room for up front.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter, e.g. "info" or "debug,actstat_codec=trace".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_initial_capacity() -> usize {
    16
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl StatsConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, StatsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| StatsError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, StatsError> {
        toml::from_str(s).map_err(|e| StatsError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, StatsError> {
        toml::to_string_pretty(self).map_err(|e| StatsError::Config(e.to_string()))
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), StatsError> {
        actstat_utils::try_init_logging(self.log_format, &self.log_level)?;
        Ok(())
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            lock_strategy: LockStrategy::default(),
            initial_capacity: default_initial_capacity(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = StatsConfig {
            lock_strategy: LockStrategy::PerAction,
            ..StatsConfig::default()
        };
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = StatsConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = StatsConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config, StatsConfig::default());
        assert_eq!(config.lock_strategy, LockStrategy::Global);
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            lock_strategy = "per_action"
            log_format = "json"
        "#;
        let config = StatsConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.lock_strategy, LockStrategy::PerAction);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.initial_capacity, 16); // default
    }

    #[test]
    fn unknown_strategy_is_config_error() {
        let err = StatsConfig::from_toml_str(r#"lock_strategy = "sharded""#).unwrap_err();
        assert!(matches!(err, StatsError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "initial_capacity = 128").unwrap();
        let config = StatsConfig::from_toml_file(file.path()).expect("should load");
        assert_eq!(config.initial_capacity, 128);
    }

    #[test]
    fn second_logging_init_is_logging_error() {
        let config = StatsConfig {
            log_level: "warn".to_string(),
            ..StatsConfig::default()
        };
        // Only one global subscriber can be installed per process.
        let _ = config.init_logging();
        assert!(matches!(config.init_logging(), Err(StatsError::Logging(_))));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = StatsConfig::from_toml_file("/nonexistent/actstat.toml");
        assert!(matches!(result, Err(StatsError::Config(_))));
    }
}
