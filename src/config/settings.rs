use serde::Deserialize;
use std::time::Duration;

use crate::utils::constants::{
    DEFAULT_GRACE_DELAY_MS, DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_REFRESH_RATIO_PERCENT,
    DEFAULT_REVOKE_TIMEOUT_MS,
};

/// ================================
/// Global client-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub shutdown: ShutdownConfig,
    pub logging: Option<LoggingConfig>
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// applied to every outbound request
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_ms: DEFAULT_HTTP_TIMEOUT_MS }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshConfig {
    /// share of `expires_in` after which the refresh grant is sent
    /// invariant: 1..=100
    #[serde(default = "default_refresh_ratio_percent")]
    pub ratio_percent: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { ratio_percent: DEFAULT_REFRESH_RATIO_PERCENT }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShutdownConfig {
    /// upper bound for the revoke call on Ctrl+C
    #[serde(default = "default_revoke_timeout_ms")]
    pub revoke_timeout_ms: u64,
    /// pause between revoke outcome and process exit
    #[serde(default = "default_grace_delay_ms")]
    pub grace_delay_ms: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            revoke_timeout_ms: DEFAULT_REVOKE_TIMEOUT_MS,
            grace_delay_ms: DEFAULT_GRACE_DELAY_MS,
        }
    }
}

impl ShutdownConfig {
    pub fn revoke_timeout(&self) -> Duration {
        Duration::from_millis(self.revoke_timeout_ms)
    }

    pub fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.grace_delay_ms)
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default = "LogFormat::from_env")]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new (level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

fn default_http_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

fn default_refresh_ratio_percent() -> u64 {
    DEFAULT_REFRESH_RATIO_PERCENT
}

fn default_revoke_timeout_ms() -> u64 {
    DEFAULT_REVOKE_TIMEOUT_MS
}

fn default_grace_delay_ms() -> u64 {
    DEFAULT_GRACE_DELAY_MS
}

fn default_log_level() -> String {
    "info".to_string()
}
