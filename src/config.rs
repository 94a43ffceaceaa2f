use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/fyyur.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    /// Whether to set the Secure flag on the session cookie carrying flash
    /// messages. Leave off unless the site is served over HTTPS.
    pub secure_cookies: bool,

    /// Idle minutes before a session and its pending flash messages expire.
    pub session_expiry_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            secure_cookies: false,
            session_expiry_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    pub loki_enabled: bool,

    pub loki_url: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
            loki_enabled: false,
            loki_url: "http://localhost:3100".to_string(),
        }
    }
}

impl Config {
    /// Loads from `path` when given, otherwise from the first config file found
    /// in the usual locations, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        for path in &Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![Self::default_config_path()];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("fyyur").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".fyyur").join("config.toml"));
        }

        paths
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    /// Writes the default config to `path` unless a file is already there.
    pub fn create_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.database_path.trim().is_empty() {
            anyhow::bail!("Database path cannot be empty");
        }

        if self.general.min_db_connections > self.general.max_db_connections {
            anyhow::bail!(
                "min_db_connections ({}) cannot exceed max_db_connections ({})",
                self.general.min_db_connections,
                self.general.max_db_connections
            );
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port must be > 0");
        }

        if self.server.session_expiry_minutes <= 0 {
            anyhow::bail!("Session expiry must be at least one minute");
        }

        Ok(())
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.general.database_path, "sqlite:data/fyyur.db");
        assert!(config.observability.metrics_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[observability]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [server]
            port = 8080
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");

        assert_eq!(config.general.max_db_connections, 5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.min_db_connections = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.database_path = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir()
            .join(format!("fyyur-config-{}", uuid::Uuid::new_v4()))
            .join("config.toml");

        assert!(Config::create_default_if_missing(&path).unwrap());
        assert!(!Config::create_default_if_missing(&path).unwrap());

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.server.port, Config::default().server.port);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
