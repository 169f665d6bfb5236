//! Server configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5173";
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Errors produced while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// A numeric variable could not be parsed.
    #[error("invalid {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },

    /// An upstream URL is not an absolute http(s) URL.
    #[error("invalid {var}: {value} (expected http:// or https:// URL)")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the image classification backend. `/predict` is appended.
    pub classifier_url: String,
    /// Base URL of the chat backend. `/chat` is appended.
    pub chat_url: String,
    pub connect_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CLASSIFIER_URL`: default `http://127.0.0.1:5173`
    /// - `CHAT_URL`: defaults to `CLASSIFIER_URL` (one backend serves both)
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MAX_UPLOAD_BYTES`: default 16 MiB
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let classifier_url = match get("CLASSIFIER_URL") {
            Some(raw) => parse_base_url("CLASSIFIER_URL", &raw)?,
            None => DEFAULT_BACKEND_URL.to_owned(),
        };
        let chat_url = match get("CHAT_URL") {
            Some(raw) => parse_base_url("CHAT_URL", &raw)?,
            None => classifier_url.clone(),
        };

        let connect_timeout_secs = parse_number(
            "UPSTREAM_CONNECT_TIMEOUT_SECS",
            get("UPSTREAM_CONNECT_TIMEOUT_SECS"),
            DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        )?;
        let max_upload_bytes = parse_number("MAX_UPLOAD_BYTES", get("MAX_UPLOAD_BYTES"), DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Self { port, classifier_url, chat_url, connect_timeout_secs, max_upload_bytes })
    }
}

fn parse_base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { var, value: raw.to_owned() });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidNumber { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
