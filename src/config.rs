//! Runtime configuration read from environment variables.

use std::env;
use std::path::PathBuf;

use crate::types::DEFAULT_FIELD_SIZE;

/// Settings for the terminal runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Board side length (`LINES_SIZE`)
    pub size: u8,
    /// Fixed RNG seed (`LINES_SEED`); clock-seeded when absent
    pub seed: Option<u32>,
    /// Snapshot file loaded at startup and written on quit (`LINES_SAVE_PATH`)
    pub save_path: Option<PathBuf>,
    /// Log file (`LINES_LOG_PATH`); logging is off when absent
    pub log_path: Option<PathBuf>,
    /// Log filter directive (`LINES_LOG`)
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_FIELD_SIZE,
            seed: None,
            save_path: None,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let size = get("LINES_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.size);
        let seed = get("LINES_SEED").and_then(|s| s.trim().parse().ok());
        let path = |key: &str| non_empty(get(key)).map(PathBuf::from);

        Self {
            size,
            seed,
            save_path: path("LINES_SAVE_PATH"),
            log_path: path("LINES_LOG_PATH"),
            log_filter: non_empty(get("LINES_LOG")).unwrap_or(defaults.log_filter),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(lookup(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().size, 9);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = lookup(&[
            ("LINES_SIZE", "7"),
            ("LINES_SEED", "42"),
            ("LINES_SAVE_PATH", "/tmp/lines.sav"),
            ("LINES_LOG_PATH", " /tmp/lines.log "),
            ("LINES_LOG", "debug"),
        ]);
        assert_eq!(config.size, 7);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.save_path, Some(PathBuf::from("/tmp/lines.sav")));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/lines.log")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = lookup(&[
            ("LINES_SIZE", "huge"),
            ("LINES_SEED", "-1"),
            ("LINES_SAVE_PATH", "   "),
            ("LINES_LOG", ""),
        ]);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = AppConfig::from_env();
    }
}
