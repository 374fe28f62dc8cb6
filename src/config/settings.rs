//! Configuration settings
//!
//! Settings are loaded from a TOML file and environment variables on top of
//! built-in defaults. Every section and field is optional in the file.

use serde::{Deserialize, Serialize};

/// Base URL of the session API when none is configured
pub const DEFAULT_BASE_URL: &str = "https://b-esper-apim.azure-api.net";

// Helper functions for serde defaults
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("besper-bot/{}", crate::utils::VERSION)
}

fn default_log_level() -> String {
    "error".to_string()
}

/// Main configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Session API configuration
    #[serde(default)]
    pub api: ApiSettings,
    /// Network configuration
    #[serde(default)]
    pub network: NetworkSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Session API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL the endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Default environment segment (e.g. `dev`)
    #[serde(default)]
    pub environment: Option<String>,
}

/// Network and proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// HTTPS proxy URL
    #[serde(default)]
    pub https_proxy: Option<String>,
    /// HTTP proxy URL
    #[serde(default)]
    pub http_proxy: Option<String>,
    /// All protocols proxy URL
    #[serde(default)]
    pub all_proxy: Option<String>,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Whole-request timeout in seconds; unset means no limit
    #[serde(default)]
    pub request_timeout: Option<u64>,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            environment: None,
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            https_proxy: None,
            http_proxy: None,
            all_proxy: None,
            connect_timeout: default_connect_timeout(),
            request_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

impl NetworkSettings {
    /// Effective proxy URL: HTTPS, then HTTP, then all-protocols
    pub fn proxy_url(&self) -> Option<&str> {
        self.https_proxy
            .as_deref()
            .or(self.http_proxy.as_deref())
            .or(self.all_proxy.as_deref())
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag; anything else disables it
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_secs(var: &str, value: &str) -> crate::Result<u64> {
    value
        .parse()
        .map_err(|e| crate::Error::config(var, &format!("Invalid number of seconds: {}", e)))
}

impl Settings {
    /// Load settings from environment variables on top of the defaults
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", &format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings)
    }

    /// Override settings with any environment variables that are set
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(endpoint) = std::env::var("API_ENDPOINT") {
            self.api.base_url = endpoint;
        }

        if let Ok(environment) = std::env::var("BESPER_ENVIRONMENT") {
            self.api.environment = Some(environment);
        }

        if let Ok(proxy) = std::env::var("HTTPS_PROXY") {
            self.network.https_proxy = Some(proxy);
        }
        if let Ok(proxy) = std::env::var("HTTP_PROXY") {
            self.network.http_proxy = Some(proxy);
        }
        if let Ok(proxy) = std::env::var("ALL_PROXY") {
            self.network.all_proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("BESPER_CONNECT_TIMEOUT") {
            self.network.connect_timeout = parse_secs("BESPER_CONNECT_TIMEOUT", &timeout)?;
        }

        if let Ok(timeout) = std::env::var("BESPER_REQUEST_TIMEOUT") {
            self.network.request_timeout = Some(parse_secs("BESPER_REQUEST_TIMEOUT", &timeout)?);
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            self.logging.verbose = parse_flag(&verbose);
        }

        Ok(self)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        crate::session::normalize_base_url(&self.api.base_url)?;

        if self.network.connect_timeout == 0 {
            return Err(crate::Error::config(
                "connect_timeout",
                "Invalid connect timeout: cannot be 0",
            ));
        }

        if self.network.request_timeout == Some(0) {
            return Err(crate::Error::config(
                "request_timeout",
                "Invalid request timeout: cannot be 0",
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        for (name, proxy_url) in [
            ("https_proxy", &self.network.https_proxy),
            ("http_proxy", &self.network.http_proxy),
            ("all_proxy", &self.network.all_proxy),
        ]
        .iter()
        {
            if let Some(url_str) = proxy_url
                && let Err(e) = url::Url::parse(url_str)
            {
                return Err(crate::Error::config(
                    *name,
                    &format!("Invalid proxy URL '{}': {}", url_str, e),
                ));
            }
        }

        Ok(())
    }
}
