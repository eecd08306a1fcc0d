// ABOUTME: Storage configuration
// ABOUTME: Database location and pool tuning, with defaults and environment overrides

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tagdeck_core::env;

use crate::{StorageError, StorageResult};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub enable_wal: bool,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: tagdeck_core::database_file(),
            enable_wal: true,
            max_connections: 10,
            busy_timeout_seconds: 30,
        }
    }
}

impl StorageConfig {
    /// Build a configuration from the process environment, falling back to defaults
    pub fn from_env() -> StorageResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> StorageResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(env::TAGDECK_DB_PATH) {
            if path.trim().is_empty() {
                return Err(StorageError::InvalidConfig(format!(
                    "{} must not be empty",
                    env::TAGDECK_DB_PATH
                )));
            }
            config.path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(env::TAGDECK_DB_MAX_CONNECTIONS) {
            config.max_connections = parse_number(env::TAGDECK_DB_MAX_CONNECTIONS, &raw)?;
            if config.max_connections == 0 {
                return Err(StorageError::InvalidConfig(format!(
                    "{} must be at least 1",
                    env::TAGDECK_DB_MAX_CONNECTIONS
                )));
            }
        }

        if let Some(raw) = lookup(env::TAGDECK_DB_BUSY_TIMEOUT_SECS) {
            config.busy_timeout_seconds = parse_number(env::TAGDECK_DB_BUSY_TIMEOUT_SECS, &raw)?;
        }

        if let Some(raw) = lookup(env::TAGDECK_DB_WAL) {
            config.enable_wal = match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => {
                    return Err(StorageError::InvalidConfig(format!(
                        "{} must be a boolean, got '{}'",
                        env::TAGDECK_DB_WAL,
                        raw
                    )))
                }
            };
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> StorageResult<T> {
    raw.trim().parse().map_err(|_| {
        StorageError::InvalidConfig(format!("{} must be a number, got '{}'", key, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = StorageConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorageConfig::default());
        assert!(config.enable_wal);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.busy_timeout_seconds, 30);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = StorageConfig::from_lookup(lookup(&[
            (env::TAGDECK_DB_PATH, "/tmp/tags.db"),
            (env::TAGDECK_DB_MAX_CONNECTIONS, "4"),
            (env::TAGDECK_DB_BUSY_TIMEOUT_SECS, " 5 "),
            (env::TAGDECK_DB_WAL, "off"),
        ]))
        .unwrap();

        assert_eq!(config.path, PathBuf::from("/tmp/tags.db"));
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.busy_timeout_seconds, 5);
        assert!(!config.enable_wal);
    }

    #[rstest]
    #[case(env::TAGDECK_DB_MAX_CONNECTIONS, "many")]
    #[case(env::TAGDECK_DB_MAX_CONNECTIONS, "0")]
    #[case(env::TAGDECK_DB_BUSY_TIMEOUT_SECS, "-1")]
    #[case(env::TAGDECK_DB_WAL, "maybe")]
    #[case(env::TAGDECK_DB_PATH, "  ")]
    fn test_invalid_values_are_rejected(#[case] key: &str, #[case] value: &str) {
        let result = StorageConfig::from_lookup(lookup(&[(key, value)]));
        match result {
            Err(StorageError::InvalidConfig(msg)) => assert!(msg.contains(key)),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
