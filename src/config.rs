use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct LumenConfig {
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub memory: MemoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MemoryConfig {
    /// Default number of items `recall` returns.
    pub recall_limit: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_lumen_dir()
            .join("journal.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { recall_limit: 10 }
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns `~/.lumen/`
pub fn default_lumen_dir() -> PathBuf {
    home_dir().join(".lumen")
}

/// Returns the default config file path: `~/.lumen/config.toml`
pub fn default_config_path() -> PathBuf {
    default_lumen_dir().join("config.toml")
}

impl LumenConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            LumenConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (LUMEN_DB, LUMEN_LOG_LEVEL, LUMEN_RECALL_LIMIT).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LUMEN_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("LUMEN_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("LUMEN_RECALL_LIMIT") {
            match val.parse() {
                Ok(limit) => self.memory.recall_limit = limit,
                Err(_) => tracing::warn!(value = %val, "ignoring invalid LUMEN_RECALL_LIMIT"),
            }
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LumenConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.memory.recall_limit, 10);
        assert!(config.storage.db_path.ends_with("journal.db"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[logging]
level = "debug"

[storage]
db_path = "/tmp/test.db"
"#;
        let config: LumenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.storage.db_path, "/tmp/test.db");
        // defaults still apply for unset sections
        assert_eq!(config.memory.recall_limit, 10);
    }

    #[test]
    fn load_from_missing_file_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LumenConfig::load_from(dir.path().join("absent.toml")).is_ok());
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[memory]\nrecall_limit = \"lots\"\n").unwrap();
        assert!(LumenConfig::load_from(&path).is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = LumenConfig::default();
        std::env::set_var("LUMEN_DB", "/tmp/override.db");
        std::env::set_var("LUMEN_LOG_LEVEL", "trace");
        std::env::set_var("LUMEN_RECALL_LIMIT", "3");

        config.apply_env_overrides();

        assert_eq!(config.storage.db_path, "/tmp/override.db");
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.memory.recall_limit, 3);

        // Clean up
        std::env::remove_var("LUMEN_DB");
        std::env::remove_var("LUMEN_LOG_LEVEL");
        std::env::remove_var("LUMEN_RECALL_LIMIT");
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/var/db.sqlite"), PathBuf::from("/var/db.sqlite"));
        assert!(expand_tilde("~/x.db").ends_with("x.db"));
    }
}
