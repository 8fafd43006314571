// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Configuration schema definitions for Warden.
//!
//! # Schema Structure
//!
//! ```text
//! WardenConfig
//! ├── token: TokenConfig
//! ├── resource: ResourceConfig
//! └── logging: LoggingConfig
//! ```
//!
//! Every section is optional; missing sections and fields take their
//! defaults.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// =============================================================================
// Constants
// =============================================================================

/// Default token lifetime in seconds (1 hour).
pub const DEFAULT_TOKEN_EXPIRATION_SECS: u64 = 3600;

/// The only supported signing algorithm.
pub const SUPPORTED_ALGORITHM: &str = "HS256";

/// Default maximum request body size read by a body selector (1 MiB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

// =============================================================================
// Top-Level Configuration
// =============================================================================

/// The root configuration structure for Warden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WardenConfig {
    /// Token signing configuration.
    #[serde(default)]
    pub token: TokenConfig,

    /// Resource extraction configuration.
    #[serde(default)]
    pub resource: ResourceConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WardenConfig {
    /// Validates the entire configuration.
    ///
    /// A missing secret is not an error here; commands that sign or verify
    /// tokens check for it themselves.
    pub fn validate(&self) -> ConfigResult<()> {
        self.token.validate()?;
        self.resource.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

// =============================================================================
// Token Configuration
// =============================================================================

/// Token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    /// Shared HMAC secret.
    #[serde(default)]
    pub secret: Option<SecretValue>,

    /// Lifetime of issued tokens in seconds.
    #[serde(default = "default_token_expiration")]
    pub expiration_secs: u64,

    /// Signing algorithm.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_token_expiration() -> u64 {
    DEFAULT_TOKEN_EXPIRATION_SECS
}

fn default_algorithm() -> String {
    SUPPORTED_ALGORITHM.to_string()
}

impl TokenConfig {
    /// Validates the token configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.expiration_secs == 0 {
            return Err(ConfigError::validation(
                "token.expiration_secs",
                "cannot be zero",
            ));
        }
        if i64::try_from(self.expiration_secs).is_err() {
            return Err(ConfigError::validation(
                "token.expiration_secs",
                "is too large",
            ));
        }
        if self.algorithm != SUPPORTED_ALGORITHM {
            return Err(ConfigError::validation(
                "token.algorithm",
                format!("unsupported algorithm '{}', expected {}", self.algorithm, SUPPORTED_ALGORITHM),
            ));
        }
        if matches!(&self.secret, Some(secret) if secret.is_empty()) {
            return Err(ConfigError::validation("token.secret", "cannot be empty"));
        }
        Ok(())
    }

    /// Returns the expiration as a Duration.
    pub fn expiration(&self) -> Duration {
        Duration::from_secs(self.expiration_secs)
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: None,
            expiration_secs: DEFAULT_TOKEN_EXPIRATION_SECS,
            algorithm: default_algorithm(),
        }
    }
}

// =============================================================================
// Resource Configuration
// =============================================================================

/// Resource extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    /// Maximum body size in bytes read by a `${body:...}` selector.
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

fn default_max_body_size() -> usize {
    DEFAULT_MAX_BODY_SIZE
}

impl ResourceConfig {
    /// Validates the resource configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_body_size == 0 {
            return Err(ConfigError::validation(
                "resource.max_body_size",
                "cannot be zero",
            ));
        }
        Ok(())
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

// =============================================================================
// Logging Configuration
// =============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default)]
    pub level: LogLevel,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Validates the logging configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Returns the level name understood by tracing filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::validation(
                "logging.level",
                format!("unknown level '{}'", other),
            )),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Compact single-line text.
    Compact,
    /// JSON for log aggregation.
    Json,
}

// =============================================================================
// Secret Value
// =============================================================================

/// A secret that is never printed.
///
/// `Debug` and `Display` both render `***`; use [`SecretValue::expose`] to
/// read the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretValue(String);

impl SecretValue {
    /// Creates a new secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the secret length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretValue(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warden_config_default() {
        let config = WardenConfig::default();
        assert!(config.token.secret.is_none());
        assert_eq!(config.token.expiration_secs, 3600);
        assert_eq!(config.token.algorithm, "HS256");
        assert_eq!(config.resource.max_body_size, 1024 * 1024);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_token_config_validation() {
        let mut token = TokenConfig::default();
        assert!(token.validate().is_ok());

        token.expiration_secs = 0;
        assert!(token.validate().is_err());

        token.expiration_secs = u64::MAX;
        assert!(token.validate().is_err());

        token.expiration_secs = 60;
        token.algorithm = "HS512".to_string();
        let err = token.validate().unwrap_err();
        assert!(err.to_string().contains("token.algorithm"));

        token.algorithm = "HS256".to_string();
        token.secret = Some(SecretValue::new(""));
        assert!(token.validate().is_err());

        token.secret = Some(SecretValue::new("secret"));
        assert!(token.validate().is_ok());
        assert_eq!(token.expiration(), Duration::from_secs(60));
    }

    #[test]
    fn test_resource_config_validation() {
        assert!(ResourceConfig::default().validate().is_ok());
        assert!(ResourceConfig { max_body_size: 0 }.validate().is_err());
    }

    #[test]
    fn test_secret_value_redacted() {
        let secret = SecretValue::new("my-secret");
        assert_eq!(secret.expose(), "my-secret");
        assert_eq!(secret.len(), 9);
        assert_eq!(secret.to_string(), "***");
        assert!(!format!("{:?}", secret).contains("my-secret"));

        let config = TokenConfig {
            secret: Some(secret),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("my-secret"));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(LogLevel::Info.as_str(), "info");
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<WardenConfig, _> =
            serde_json::from_str(r#"{"token":{"secret":"s","issuer":"x"}}"#);
        assert!(result.is_err());
    }
}
