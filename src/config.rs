//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Listing sheet
//!
//! ```bash
//! export SHEET_ID="1xvC3V5g5Bv11UbEHbWBfEgxGL6lN9YrUyuui5eOQqFg"
//! export SHEET_NAME="Total Websites"
//! ```
//!
//! ## Cart storage
//!
//! The cart is written to `CART_STORAGE_DIR/CART_STORAGE_KEY.json` unless Redis
//! is configured, either as a full URL or by components:
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//!
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHEET_ENDPOINT` - Spreadsheet service base (default: `https://docs.google.com/spreadsheets/d`)
//! - `FETCH_TIMEOUT_SECONDS` - Listing request timeout (default: 30, max: 300)
//! - `CART_STORAGE_DIR` - Directory of the file backend (default: `data`)
//! - `CART_STORAGE_KEY` - Storage key of the cart (default: `bsm_cart`)

use crate::application::services::cart_service::DEFAULT_CART_KEY;
use anyhow::{Context, Result};
use std::env;

/// Listing sheet used when `SHEET_ID` is not set.
pub const DEFAULT_SHEET_ID: &str = "1xvC3V5g5Bv11UbEHbWBfEgxGL6lN9YrUyuui5eOQqFg";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL of the spreadsheet service, without the document id.
    pub sheet_endpoint: String,
    pub sheet_id: String,
    pub sheet_name: String,
    /// Timeout of the single listing request, in seconds.
    pub fetch_timeout_seconds: u64,
    pub redis_url: Option<String>,
    pub cart_storage_dir: String,
    pub cart_storage_key: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on values that
    /// cannot be read at all.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let sheet_endpoint = env::var("SHEET_ENDPOINT")
            .unwrap_or_else(|_| "https://docs.google.com/spreadsheets/d".to_string());
        let sheet_id = env::var("SHEET_ID").unwrap_or_else(|_| DEFAULT_SHEET_ID.to_string());
        let sheet_name = env::var("SHEET_NAME").unwrap_or_else(|_| "Total Websites".to_string());

        let fetch_timeout_seconds = match env::var("FETCH_TIMEOUT_SECONDS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("FETCH_TIMEOUT_SECONDS must be a number, got '{v}'"))?,
            Err(_) => 30,
        };

        let redis_url = Self::load_redis_url();

        let cart_storage_dir = env::var("CART_STORAGE_DIR").unwrap_or_else(|_| "data".to_string());
        let cart_storage_key =
            env::var("CART_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_CART_KEY.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            sheet_endpoint,
            sheet_id,
            sheet_name,
            fetch_timeout_seconds,
            redis_url,
            cart_storage_dir,
            cart_storage_key,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match password {
            // Empty password means no authentication
            Some(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `sheet_endpoint` is not an HTTP(S) URL or `sheet_id` is empty
    /// - `fetch_timeout_seconds` is outside `1..=300`
    /// - `cart_storage_key` contains anything but letters, digits, `_` and `-`
    /// - `redis_url` has the wrong scheme
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

        if !self.sheet_endpoint.starts_with("https://")
            && !self.sheet_endpoint.starts_with("http://")
        {
            anyhow::bail!(
                "SHEET_ENDPOINT must be an http(s) URL, got '{}'",
                self.sheet_endpoint
            );
        }

        if self.sheet_id.trim().is_empty() {
            anyhow::bail!("SHEET_ID must not be empty");
        }

        if self.fetch_timeout_seconds == 0 || self.fetch_timeout_seconds > 300 {
            anyhow::bail!(
                "FETCH_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.fetch_timeout_seconds
            );
        }

        if self.cart_storage_key.is_empty()
            || !self
                .cart_storage_key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            anyhow::bail!(
                "CART_STORAGE_KEY may only contain letters, digits, '_' and '-', got '{}'",
                self.cart_storage_key
            );
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(redis_url)
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Sheet: {} / {}", self.sheet_id, self.sheet_name);
        tracing::info!("  Fetch timeout: {}s", self.fetch_timeout_seconds);

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Cart storage: Redis {}", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Cart storage: file in {}", self.cart_storage_dir);
        }

        tracing::info!("  Cart key: {}", self.cart_storage_key);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks sensitive information in connection strings for logging.
///
/// `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
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

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            sheet_endpoint: "https://docs.google.com/spreadsheets/d".to_string(),
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            sheet_name: "Total Websites".to_string(),
            fetch_timeout_seconds: 30,
            redis_url: None,
            cart_storage_dir: "data".to_string(),
            cart_storage_key: "bsm_cart".to_string(),
        }
    }

    #[test]
    fn test_mask_connection_string() {
        assert_eq!(
            mask_connection_string("redis://:password@localhost:6379/0"),
            "redis://:***@localhost:6379/0"
        );
        assert_eq!(
            mask_connection_string("redis://localhost:6379/0"),
            "redis://localhost:6379/0"
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.fetch_timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.fetch_timeout_seconds = 30;

        config.sheet_endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
        config.sheet_endpoint = "https://docs.google.com/spreadsheets/d".to_string();

        config.cart_storage_key = "../cart".to_string();
        assert!(config.validate().is_err());
        config.cart_storage_key = "bsm_cart".to_string();

        config.redis_url = Some("http://localhost".to_string());
        assert!(config.validate().is_err());
        config.redis_url = Some("redis://localhost:6379/0".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_defaults_from_empty_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for key in [
                "LISTEN",
                "SHEET_ID",
                "SHEET_NAME",
                "FETCH_TIMEOUT_SECONDS",
                "CART_STORAGE_KEY",
                "REDIS_URL",
                "REDIS_HOST",
            ] {
                env::remove_var(key);
            }
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.sheet_id, DEFAULT_SHEET_ID);
        assert_eq!(config.sheet_name, "Total Websites");
        assert_eq!(config.fetch_timeout_seconds, 30);
        assert_eq!(config.cart_storage_key, "bsm_cart");
        assert!(config.redis_url.is_none());
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_is_error() {
        unsafe {
            env::set_var("FETCH_TIMEOUT_SECONDS", "soon");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("FETCH_TIMEOUT_SECONDS");
        }
    }

    #[test]
    #[serial]
    fn test_load_redis_url_from_components() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("REDIS_URL");
            env::set_var("REDIS_HOST", "redis-host");
            env::set_var("REDIS_PORT", "6380");
            env::set_var("REDIS_DB", "1");
        }

        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://redis-host:6380/1");

        unsafe {
            env::set_var("REDIS_PASSWORD", "secret");
        }
        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://:secret@redis-host:6380/1");

        unsafe {
            env::set_var("REDIS_PASSWORD", "");
        }
        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://redis-host:6380/1");

        unsafe {
            env::remove_var("REDIS_HOST");
            env::remove_var("REDIS_PORT");
            env::remove_var("REDIS_DB");
            env::remove_var("REDIS_PASSWORD");
        }
    }

    #[test]
    #[serial]
    fn test_redis_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REDIS_URL", "redis://from-url:6379/0");
            env::set_var("REDIS_HOST", "from-components");
        }

        let url = Config::load_redis_url().unwrap();
        assert!(url.contains("from-url"));
        assert!(!url.contains("from-components"));

        unsafe {
            env::remove_var("REDIS_URL");
            env::remove_var("REDIS_HOST");
        }
    }
}
