use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ToolConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: "reports.db".into(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
        }
    }
}

/// Returns `~/.report-purge/`, or `None` when no home directory is known.
pub fn default_tool_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".report-purge"))
}

/// Returns the default config file path: `~/.report-purge/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    default_tool_dir().map(|dir| dir.join("config.toml"))
}

impl ToolConfig {
    /// Load config from the default TOML file (if any) then apply env var overrides.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from(path),
            None => {
                let mut config = ToolConfig::default();
                config.apply_env_overrides();
                Ok(config)
            }
        }
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            debug!("no config file at {}, using defaults", path.display());
            ToolConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (REPORTS_DB, REPORTS_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("REPORTS_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("REPORTS_LOG_LEVEL") {
            self.logging.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
