//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::net::SocketAddr;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directives
    /// Example: info,logister=debug
    pub log_filter: Option<String>,

    /// Address the server binds to, overriding `site-addr` from Cargo.toml
    /// Example: 0.0.0.0:8080
    pub site_addr: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("RUST_LOG").ok(),
            site_addr: std::env::var("LOGISTER_SITE_ADDR").ok(),
        }
    }

    pub fn has_log_filter(&self) -> bool {
        self.log_filter.is_some()
    }

    pub fn has_site_addr(&self) -> bool {
        self.site_addr.is_some()
    }

    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Configured bind address, or `default` when unset or unparseable
    pub fn site_addr_or(&self, default: SocketAddr) -> SocketAddr {
        match self.site_addr.as_deref().map(str::parse::<SocketAddr>) {
            Some(Ok(addr)) => addr,
            Some(Err(err)) => {
                tracing::warn!("Ignoring invalid LOGISTER_SITE_ADDR: {}", err);
                default
            }
            None => default,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    fn default_addr() -> SocketAddr {
        "127.0.0.1:3000".parse().unwrap()
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            log_filter: None,
            site_addr: None,
        };

        assert!(!config.has_log_filter());
        assert!(!config.has_site_addr());
        assert_eq!(config.log_filter_or_default(), DEFAULT_LOG_FILTER);
        assert_eq!(config.site_addr_or(default_addr()), default_addr());
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            log_filter: Some("debug,logister=trace".to_string()),
            site_addr: Some("0.0.0.0:8080".to_string()),
        };

        assert!(config.has_log_filter());
        assert_eq!(config.log_filter_or_default(), "debug,logister=trace");
        assert_eq!(
            config.site_addr_or(default_addr()),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_site_addr_falls_back() {
        let config = Config {
            log_filter: None,
            site_addr: Some("not-an-address".to_string()),
        };

        assert!(config.has_site_addr());
        assert_eq!(config.site_addr_or(default_addr()), default_addr());
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            log_filter: Some("warn".to_string()),
            site_addr: None,
        };
        let cloned = config.clone();

        assert_eq!(config.log_filter, cloned.log_filter);
        assert_eq!(config.site_addr, cloned.site_addr);
    }
}
