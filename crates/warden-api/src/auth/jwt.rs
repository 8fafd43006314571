// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Access token management.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use warden_core::token::SIGNING_ALGORITHM_NAME;
use warden_core::{decode, decode_unverified, encode, AccessToken, Clock, SystemClock};

use crate::error::{ApiError, ApiResult};

/// Secrets shorter than this are accepted with a warning.
pub const RECOMMENDED_SECRET_LEN: usize = 32;

// =============================================================================
// JwtConfig
// =============================================================================

/// Token signing configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared HMAC secret.
    #[serde(skip_serializing)]
    pub secret: String,
    /// Lifetime of issued tokens in seconds.
    pub expiration_secs: i64,
    /// Signing algorithm. Only `HS256` is supported.
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // Must be set by user
            expiration_secs: 3600, // 1 hour
            algorithm: SIGNING_ALGORITHM_NAME.to_string(),
        }
    }
}

impl JwtConfig {
    /// Creates a new configuration with the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Sets the expiration time.
    pub fn with_expiration(mut self, duration: Duration) -> Self {
        self.expiration_secs = i64::try_from(duration.as_secs()).unwrap_or(i64::MAX);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ApiResult<()> {
        if self.secret.is_empty() {
            return Err(ApiError::internal("token secret is not configured"));
        }
        if self.algorithm != SIGNING_ALGORITHM_NAME {
            return Err(ApiError::internal(format!(
                "unsupported signing algorithm: {}",
                self.algorithm
            )));
        }
        if self.secret.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                len = self.secret.len(),
                recommended = RECOMMENDED_SECRET_LEN,
                "Token secret is shorter than recommended"
            );
        }
        Ok(())
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_secs", &self.expiration_secs)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

// =============================================================================
// JwtManager
// =============================================================================

/// Issues and validates access tokens with a fixed secret and clock.
///
/// Cloning is cheap; clones share configuration and clock.
#[derive(Clone)]
pub struct JwtManager {
    config: Arc<JwtConfig>,
    clock: Arc<dyn Clock>,
}

impl JwtManager {
    /// Creates a manager that reads the system clock.
    pub fn new(config: JwtConfig) -> ApiResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a manager with an explicit clock.
    pub fn with_clock(config: JwtConfig, clock: Arc<dyn Clock>) -> ApiResult<Self> {
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            clock,
        })
    }

    /// Signs the given token.
    pub fn create_token(&self, token: &AccessToken) -> ApiResult<String> {
        Ok(encode(token, self.config.secret.as_bytes())?)
    }

    /// Issues a token for `access_key` expiring `expiration_secs` from now.
    pub fn issue(&self, access_key: &str, scope: &str) -> ApiResult<String> {
        let token = AccessToken::expiring_in(
            access_key,
            scope,
            self.config.expiration_secs,
            self.clock.as_ref(),
        );
        let signed = self.create_token(&token)?;

        tracing::debug!(
            access_key = %token.access_key,
            scope = %token.scope,
            expires_at = token.expires_at,
            "Issued access token"
        );

        Ok(signed)
    }

    /// Verifies the signature and expiry of a token.
    pub fn validate_token(&self, token: &str) -> ApiResult<AccessToken> {
        Ok(decode(
            token,
            self.config.secret.as_bytes(),
            self.clock.as_ref(),
        )?)
    }

    /// Reads the claims of a token without checking signature or expiry.
    ///
    /// The result is not authenticated and must not be used for
    /// authorization.
    pub fn decode_without_validation(&self, token: &str) -> ApiResult<AccessToken> {
        Ok(decode_unverified(token)?)
    }

    /// Returns the token expiration time in seconds.
    pub fn expiration_secs(&self) -> i64 {
        self.config.expiration_secs
    }

    /// Returns the clock used for issuing and expiry checks.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl fmt::Debug for JwtManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtManager")
            .field("algorithm", &self.config.algorithm)
            .field("expiration_secs", &self.config.expiration_secs)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use warden_core::{FixedClock, TokenError};

    use super::*;

    const SECRET: &str = "test-secret-key-that-is-long-enough-for-testing";
    const NOW: i64 = 1_580_598_000;

    fn manager_at(now: i64) -> JwtManager {
        JwtManager::with_clock(JwtConfig::new(SECRET), Arc::new(FixedClock::at(now))).unwrap()
    }

    #[test]
    fn test_issue_and_validate_token() {
        let manager = manager_at(NOW);

        let token = manager.issue("liam", "kct").unwrap();
        let claims = manager.validate_token(&token).unwrap();

        assert_eq!(claims.access_key, "liam");
        assert_eq!(claims.scope, "kct");
        assert_eq!(claims.expires_at, NOW + 3600);
    }

    #[test]
    fn test_expired_token() {
        let token = manager_at(NOW).issue("liam", "kct").unwrap();

        let err = manager_at(NOW + 3601).validate_token(&token).unwrap_err();
        assert!(matches!(err, ApiError::Token(TokenError::Expired { .. })));

        assert!(manager_at(NOW + 3600).validate_token(&token).is_ok());
    }

    #[test]
    fn test_invalid_token() {
        let err = manager_at(NOW).validate_token("invalid.token").unwrap_err();
        assert!(matches!(err, ApiError::Token(TokenError::Malformed { .. })));
    }

    #[test]
    fn test_wrong_secret() {
        let other = JwtManager::with_clock(
            JwtConfig::new("another-secret-for-testing-purposes"),
            Arc::new(FixedClock::at(NOW)),
        )
        .unwrap();

        let token = other.issue("liam", "kct").unwrap();
        let err = manager_at(NOW).validate_token(&token).unwrap_err();
        assert!(matches!(err, ApiError::Token(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_decode_without_validation() {
        let manager = manager_at(NOW);
        let token = manager
            .create_token(&AccessToken::new("liam", NOW - 60, "kct"))
            .unwrap();

        assert!(manager.validate_token(&token).is_err());

        let decoded = manager.decode_without_validation(&token).unwrap();
        assert_eq!(decoded.access_key, "liam");
    }

    #[test]
    fn test_config_validation() {
        assert!(JwtManager::new(JwtConfig::default()).is_err());

        let config = JwtConfig {
            algorithm: "HS512".to_string(),
            ..JwtConfig::new(SECRET)
        };
        assert!(config.validate().is_err());

        // Short secrets are accepted.
        assert!(JwtConfig::new("secret").validate().is_ok());
    }

    #[test]
    fn test_with_expiration() {
        let config = JwtConfig::new(SECRET).with_expiration(Duration::from_secs(60));
        assert_eq!(config.expiration_secs, 60);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", JwtConfig::new(SECRET));
        assert!(!debug.contains(SECRET));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_serialize_skips_secret() {
        let json = serde_json::to_value(JwtConfig::new(SECRET)).unwrap();
        assert!(json.get("secret").is_none());
        assert_eq!(json["algorithm"], "HS256");
    }
}
