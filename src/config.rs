//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export DATA_DIR="/var/lib/snapurl"
//! export PUBLIC_BASE_URL="https://go.example.com"
//! ```
//!
//! ## Variables
//!
//! All variables are optional.
//!
//! - `LISTEN` - Bind address (default: `127.0.0.1:3000`)
//! - `DATA_DIR` - Directory holding the link store (default: `./data`)
//! - `PUBLIC_BASE_URL` - Fixed origin for short URLs (default: taken from the `Host` header)
//! - `HOME_URL` - Where failed redirects send the visitor (default: `/`)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity when none is given (default: 30, max: 525600)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::application::services::validator::{DEFAULT_VALIDITY_MINUTES, MAX_VALIDITY_MINUTES};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub data_dir: PathBuf,
    pub public_base_url: Option<String>,
    pub home_url: String,
    pub default_validity_minutes: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            data_dir: PathBuf::from("./data"),
            public_base_url: None,
            home_url: "/".to_string(),
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DEFAULT_VALIDITY_MINUTES` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let home_url = env::var("HOME_URL").unwrap_or(defaults.home_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let default_validity_minutes = match env::var("DEFAULT_VALIDITY_MINUTES") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("DEFAULT_VALIDITY_MINUTES must be a number, got '{}'", v))?,
            Err(_) => defaults.default_validity_minutes,
        };

        Ok(Self {
            listen_addr,
            data_dir,
            public_base_url,
            home_url,
            default_validity_minutes,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `public_base_url` is not an `http(s)://` URL
    /// - `home_url` is empty
    /// - `default_validity_minutes` is outside `1..=525600`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref base) = self.public_base_url
            && !base.starts_with("http://")
            && !base.starts_with("https://")
        {
            anyhow::bail!(
                "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                base
            );
        }

        if self.home_url.trim().is_empty() {
            anyhow::bail!("HOME_URL must not be empty");
        }

        if self.default_validity_minutes == 0
            || self.default_validity_minutes > MAX_VALIDITY_MINUTES
        {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be between 1 and {}, got {}",
                MAX_VALIDITY_MINUTES,
                self.default_validity_minutes
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Data directory: {}", self.data_dir.display());

        match self.public_base_url {
            Some(ref base) => tracing::info!("  Public base URL: {}", base),
            None => tracing::info!("  Public base URL: from Host header"),
        }

        tracing::info!("  Home URL: {}", self.home_url);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "DATA_DIR",
        "PUBLIC_BASE_URL",
        "HOME_URL",
        "DEFAULT_VALIDITY_MINUTES",
        "RUST_LOG",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.public_base_url = Some("go.example.com".to_string());
        assert!(config.validate().is_err());

        config.public_base_url = Some("https://go.example.com".to_string());
        assert!(config.validate().is_ok());

        config.home_url = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_validity_bounds() {
        let mut config = Config::default();

        config.default_validity_minutes = 0;
        assert!(config.validate().is_err());

        config.default_validity_minutes = 525_600;
        assert!(config.validate().is_ok());

        config.default_validity_minutes = 525_601;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert!(config.public_base_url.is_none());
        assert_eq!(config.home_url, "/");
        assert_eq!(config.default_validity_minutes, 30);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "0.0.0.0:8080");
            env::set_var("DATA_DIR", "/tmp/snapurl");
            env::set_var("PUBLIC_BASE_URL", "https://go.example.com");
            env::set_var("HOME_URL", "https://example.com/");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "90");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/snapurl"));
        assert_eq!(
            config.public_base_url.as_deref(),
            Some("https://go.example.com")
        );
        assert_eq!(config.home_url, "https://example.com/");
        assert_eq!(config.default_validity_minutes, 90);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_public_base_url_is_unset() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PUBLIC_BASE_URL", "  ");
        }

        let config = Config::from_env().unwrap();
        assert!(config.public_base_url.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_non_numeric_default_validity() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DEFAULT_VALIDITY_MINUTES", "half an hour");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
