//! Configuration loading for Somm services
//!
//! Two-tier resolution with ENV → TOML priority. Environment
//! variables always win so that deployments can override the config
//! file without editing it. Missing API keys are not an error here:
//! the recommendation service degrades to its fallback paths when a
//! credential is absent.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default bind address for the recommendation service
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5870";

/// Default number of concurrent pairing-vendor calls per batch
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Default pairing vendor endpoint
pub const DEFAULT_PAIRING_API_URL: &str =
    "https://vi-api-c89ollq7.uk.gateway.dev/dish-pairings";

/// TOML config file contents (`~/.config/somm/somm-pair.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub bind_address: Option<String>,
    pub batch_size: Option<usize>,
    pub pairing_api_url: Option<String>,
    pub pairing_api_key: Option<String>,
    pub llm_api_key: Option<String>,
}

/// Resolved configuration for the recommendation service
#[derive(Debug, Clone)]
pub struct PairConfig {
    pub bind_address: String,
    pub batch_size: usize,
    pub pairing_api_url: String,
    /// Pairing vendor credential; `None` switches every dish to the
    /// mock fallback path
    pub pairing_api_key: Option<String>,
    /// LLM credential; `None` disables translation and menu scanning
    pub llm_api_key: Option<String>,
}

impl Default for PairConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            pairing_api_url: DEFAULT_PAIRING_API_URL.to_string(),
            pairing_api_key: None,
            llm_api_key: None,
        }
    }
}

impl PairConfig {
    /// Load configuration with ENV → TOML → default priority
    pub fn load() -> Result<Self> {
        let toml_config = match default_config_path() {
            Some(path) if path.exists() => read_toml_config(&path)?,
            _ => TomlConfig::default(),
        };
        Ok(Self::resolve(toml_config))
    }

    /// Merge TOML values with environment overrides
    pub fn resolve(toml_config: TomlConfig) -> Self {
        let defaults = Self::default();

        let bind_address = env_value("SOMM_BIND_ADDRESS")
            .or(toml_config.bind_address)
            .unwrap_or(defaults.bind_address);

        let batch_size = match env_value("SOMM_BATCH_SIZE") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(value = %raw, "Invalid SOMM_BATCH_SIZE, using default");
                    toml_config.batch_size.unwrap_or(defaults.batch_size)
                }
            },
            None => toml_config.batch_size.unwrap_or(defaults.batch_size),
        };

        let pairing_api_url = env_value("SOMM_PAIRING_URL")
            .or(toml_config.pairing_api_url)
            .unwrap_or(defaults.pairing_api_url);

        let pairing_api_key =
            resolve_api_key("SOMM_PAIRING_API_KEY", toml_config.pairing_api_key, "pairing vendor");
        let llm_api_key = resolve_api_key("SOMM_LLM_API_KEY", toml_config.llm_api_key, "LLM");

        Self {
            bind_address,
            batch_size,
            pairing_api_url,
            pairing_api_key,
            llm_api_key,
        }
    }
}

/// Resolve one API key with ENV → TOML priority
///
/// A key that is present but blank counts as absent.
fn resolve_api_key(env_var: &str, toml_key: Option<String>, label: &str) -> Option<String> {
    if let Some(key) = env_value(env_var) {
        if is_valid_key(&key) {
            info!("{} API key loaded from environment variable", label);
            return Some(key);
        }
    }

    if let Some(key) = toml_key {
        if is_valid_key(&key) {
            info!("{} API key loaded from TOML config", label);
            return Some(key);
        }
    }

    warn!("{} API key not configured, service will degrade gracefully", label);
    None
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Default configuration file path (`~/.config/somm/somm-pair.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("somm").join("somm-pair.toml"))
}

/// Read and parse a TOML config file
pub fn read_toml_config(path: &std::path::Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed: {}", e)))?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for var in [
            "SOMM_BIND_ADDRESS",
            "SOMM_BATCH_SIZE",
            "SOMM_PAIRING_URL",
            "SOMM_PAIRING_API_KEY",
            "SOMM_LLM_API_KEY",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn valid_key_rejects_blank() {
        assert!(is_valid_key("abc123"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("   "));
    }

    #[test]
    #[serial]
    fn defaults_apply_when_nothing_configured() {
        clear_env();
        let config = PairConfig::resolve(TomlConfig::default());
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.pairing_api_url, DEFAULT_PAIRING_API_URL);
        assert!(config.pairing_api_key.is_none());
        assert!(config.llm_api_key.is_none());
    }

    #[test]
    #[serial]
    fn env_overrides_toml() {
        clear_env();
        std::env::set_var("SOMM_BATCH_SIZE", "3");
        std::env::set_var("SOMM_PAIRING_API_KEY", "env-key");

        let toml_config = TomlConfig {
            batch_size: Some(8),
            pairing_api_key: Some("toml-key".to_string()),
            ..Default::default()
        };

        let config = PairConfig::resolve(toml_config);
        assert_eq!(config.batch_size, 3);
        assert_eq!(config.pairing_api_key.as_deref(), Some("env-key"));
        clear_env();
    }

    #[test]
    #[serial]
    fn blank_env_key_falls_back_to_toml() {
        clear_env();
        std::env::set_var("SOMM_LLM_API_KEY", "   ");

        let toml_config = TomlConfig {
            llm_api_key: Some("toml-key".to_string()),
            ..Default::default()
        };

        let config = PairConfig::resolve(toml_config);
        assert_eq!(config.llm_api_key.as_deref(), Some("toml-key"));
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_batch_size_env_uses_toml_value() {
        clear_env();
        std::env::set_var("SOMM_BATCH_SIZE", "zero");

        let toml_config = TomlConfig {
            batch_size: Some(7),
            ..Default::default()
        };

        let config = PairConfig::resolve(toml_config);
        assert_eq!(config.batch_size, 7);
        clear_env();
    }

    #[test]
    #[serial]
    fn toml_file_round_trip() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address = \"0.0.0.0:8080\"").unwrap();
        writeln!(file, "batch_size = 10").unwrap();
        writeln!(file, "pairing_api_key = \"file-key\"").unwrap();

        let toml_config = read_toml_config(file.path()).unwrap();
        let config = PairConfig::resolve(toml_config);
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.pairing_api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "batch_size = \"not a number").unwrap();

        let result = read_toml_config(file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
