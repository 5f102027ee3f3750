use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "COLORDETECT_LOG";
pub const HEXDUMP_LIMIT_ENV: &str = "COLORDETECT_HEXDUMP_LIMIT";

const DEFAULT_LOG_FILTER: &str = "warn";
const DEFAULT_HEXDUMP_LIMIT: usize = 256;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the CLI, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Tracing filter directive, e.g. `debug` or `colordetect_model=trace`
    pub log_filter: String,

    /// Bytes shown by `hexdump` when no `--length` is given
    pub hexdump_limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            hexdump_limit: DEFAULT_HEXDUMP_LIMIT,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset or blank values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            EnvFilter::try_new(filter.trim()).map_err(|e| ConfigError::InvalidValue {
                name: LOG_ENV,
                value: filter.clone(),
                reason: e.to_string(),
            })?;
            config.log_filter = filter.trim().to_string();
        }

        if let Some(limit) = lookup(HEXDUMP_LIMIT_ENV).filter(|v| !v.trim().is_empty()) {
            config.hexdump_limit =
                limit
                    .trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                        name: HEXDUMP_LIMIT_ENV,
                        value: limit.clone(),
                        reason: e.to_string(),
                    })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.hexdump_limit, 256);
    }

    #[test]
    fn test_values_are_read() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (LOG_ENV, " debug "),
            (HEXDUMP_LIMIT_ENV, "64"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.hexdump_limit, 64);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config =
            CliConfig::from_lookup(lookup_from(&[(LOG_ENV, "  "), (HEXDUMP_LIMIT_ENV, "")])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_invalid_log_filter_is_rejected() {
        let err = CliConfig::from_lookup(lookup_from(&[(LOG_ENV, "colordetect=loud")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { name, value, .. } => {
                assert_eq!(name, LOG_ENV);
                assert_eq!(value, "colordetect=loud");
            }
        }
    }

    #[test]
    fn test_directive_log_filter_is_accepted() {
        let config =
            CliConfig::from_lookup(lookup_from(&[(LOG_ENV, "warn,colordetect_model=trace")])).unwrap();
        assert_eq!(config.log_filter, "warn,colordetect_model=trace");
    }

    #[test]
    fn test_invalid_limit_is_rejected() {
        let err = CliConfig::from_lookup(lookup_from(&[(HEXDUMP_LIMIT_ENV, "lots")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { name, value, .. } => {
                assert_eq!(name, HEXDUMP_LIMIT_ENV);
                assert_eq!(value, "lots");
            }
        }
    }
}
