use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use contracts::system::config::{AppConfig, FetchPolicy};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub firebase: FirebaseConfig,
    pub access: AccessConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FirebaseConfig {
    pub hr_url: String,
    pub orders_url: String,
    pub employees_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccessConfig {
    pub admin_email: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    pub retry_attempts: u32,
    pub retry_delay_ms: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let policy = FetchPolicy::default();
        Self {
            retry_attempts: policy.retry_attempts,
            retry_delay_ms: policy.retry_delay_ms,
        }
    }
}

/// Ошибки валидации конфигурации
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("config value `{0}` must not be empty")]
    EmptyValue(&'static str),

    #[error("fetch.retry_attempts must be at least 1")]
    ZeroRetryAttempts,

    #[error("config already initialized")]
    AlreadyInitialized,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = include_str!("../../../../config.toml");

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("firebase.hr_url", &self.firebase.hr_url),
            ("firebase.orders_url", &self.firebase.orders_url),
            ("firebase.employees_base_url", &self.firebase.employees_base_url),
            ("access.admin_email", &self.access.admin_email),
            ("server.dist_dir", &self.server.dist_dir),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue(name));
            }
        }
        if self.fetch.retry_attempts == 0 {
            return Err(ConfigError::ZeroRetryAttempts);
        }
        Ok(())
    }

    /// The part of the configuration the browser app needs.
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            hr_url: self.firebase.hr_url.clone(),
            orders_url: self.firebase.orders_url.clone(),
            employees_base_url: self.firebase.employees_base_url.clone(),
            admin_email: self.access.admin_email.trim().to_lowercase(),
            fetch: FetchPolicy {
                retry_attempts: self.fetch.retry_attempts,
                retry_delay_ms: self.fetch.retry_delay_ms,
            },
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                config.validate()?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    config.validate()?;
    Ok(config)
}

/// Load once into the global slot.
pub fn initialize() -> anyhow::Result<&'static Config> {
    let config = load_config()?;
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    get()
}

pub fn get() -> anyhow::Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("config is not initialized"))
}

/// Resolve the static files directory.
/// Relative paths are taken relative to the executable directory when that
/// directory contains them, otherwise relative to the working directory.
pub fn resolve_dist_dir(config: &Config) -> PathBuf {
    let dist = Path::new(&config.server.dist_dir);
    if dist.is_absolute() {
        return dist.to_path_buf();
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(dist);
            if candidate.exists() {
                return candidate;
            }
        }
    }
    dist.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.fetch.retry_attempts, 3);
        assert_eq!(config.fetch.retry_delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fetch_section_is_optional() {
        let toml_text = r#"
[server]
port = 8080
dist_dir = "dist"

[firebase]
hr_url = "https://db/hr.json"
orders_url = "https://db/f3.json"
employees_base_url = "https://db/employees"

[access]
admin_email = " Boss@Lumi.vn "
"#;
        let config: Config = toml::from_str(toml_text).unwrap();
        let app = config.to_app_config();
        assert_eq!(app.fetch, FetchPolicy::default());
        assert_eq!(app.admin_email, "boss@lumi.vn");
        assert_eq!(app.employee_url("e1"), "https://db/employees/e1.json");
    }

    #[test]
    fn test_validate_rejects_empty_url_and_zero_retries() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.firebase.orders_url = "  ".into();
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyValue("firebase.orders_url"))
        );

        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.fetch.retry_attempts = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRetryAttempts));
    }
}
