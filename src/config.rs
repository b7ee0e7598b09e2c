//! Configuration for tpt.
//!
//! The only tunable is which program receives delegated requests. Most
//! installs never create the file and run on defaults.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment override for the delegate program. Takes precedence over
/// the config file; also the seam the integration tests use to substitute
/// a fake tput.
pub const DELEGATE_ENV: &str = "TPT_TPUT";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub delegate: DelegateConfig,
}

/// Delegation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegateConfig {
    /// Program invoked for capabilities outside the built-in table
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_program() -> String {
    "tput".to_string()
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/tpt/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (~/.config/tpt)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("tpt"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Program to delegate to, after applying the environment override.
    pub fn delegate_program(&self) -> String {
        std::env::var(DELEGATE_ENV).unwrap_or_else(|_| self.delegate.program.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_delegates_to_tput() {
        let config = Config::default();
        assert_eq!(config.delegate.program, "tput");
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.delegate.program, config.delegate.program);
    }

    #[test]
    fn delegate_config_parses_from_toml() {
        let toml_str = r#"
[delegate]
program = "/opt/ncurses/bin/tput"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.delegate.program, "/opt/ncurses/bin/tput");
    }

    #[test]
    fn delegate_config_defaults_when_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.delegate.program, "tput");
    }

    #[test]
    fn config_path_returns_valid_path() {
        let path = Config::config_path().unwrap();
        assert!(path.to_string_lossy().contains("config.toml"));
        assert!(path.to_string_lossy().contains("tpt"));
    }

    #[test]
    fn config_dir_returns_valid_path() {
        let dir = Config::config_dir().unwrap();
        assert!(dir.to_string_lossy().contains("tpt"));
        assert!(dir.to_string_lossy().contains(".config"));
    }

    #[test]
    fn env_override_wins_over_config() {
        let mut config = Config::default();
        config.delegate.program = "configured-tput".to_string();

        std::env::set_var(DELEGATE_ENV, "/tmp/override-tput");
        let program = config.delegate_program();
        std::env::remove_var(DELEGATE_ENV);

        assert_eq!(program, "/tmp/override-tput");
        assert_eq!(config.delegate_program(), "configured-tput");
    }
}
