use chrono::{FixedOffset, Local, Offset, Utc};
use thiserror::Error;
use url::Url;

use crate::constants::API_BASE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Remote API
    pub api_base: String,

    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Display
    pub display_offset: FixedOffset,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The remote API base is not read from the environment; it is always
    /// [`API_BASE`].
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: API_BASE.to_string(),

            web_host: env_or_default("WEB_HOST", "127.0.0.1"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            display_offset: parse_env_offset("DISPLAY_UTC_OFFSET_MINUTES")?,
        })
    }

    /// Configuration for tests: UTC display, ephemeral port.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            display_offset: Utc.fix(),
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API base is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base).map_err(|e| ConfigError::InvalidValue {
            name: "api_base".to_string(),
            message: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                name: "api_base".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.web_host.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "WEB_HOST".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The posts collection endpoint, `{api_base}/posts`.
    #[must_use]
    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.api_base.trim_end_matches('/'))
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

/// Parse a UTC offset in minutes, defaulting to the host's current offset.
fn parse_env_offset(name: &str) -> Result<FixedOffset, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => {
            let minutes: i32 = val.trim().parse().map_err(|e| ConfigError::ParseInt {
                name: name.to_string(),
                source: e,
            })?;
            offset_from_minutes(minutes).ok_or_else(|| ConfigError::InvalidValue {
                name: name.to_string(),
                message: format!("offset must be within ±1439 minutes, got {minutes}"),
            })
        }
        _ => Ok(Local::now().offset().fix()),
    }
}

fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
}
