// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `verify` command.

use std::sync::Arc;

use serde::Serialize;
use warden_api::JwtManager;
use warden_config::WardenConfig;
use warden_core::{AccessToken, Clock, FixedClock, SystemClock};

use super::{format_timestamp, jwt_manager, print_json};
use crate::cli::{Cli, OutputFormat, VerifyArgs};
use crate::error::BinResult;

/// Outcome of a successful verification.
#[derive(Debug, Clone, Serialize)]
pub struct Verification {
    /// Always `true`; failures are reported as errors.
    pub valid: bool,
    /// Instant the token was verified at.
    pub verified_at: i64,
    /// Seconds until expiry, measured from `verified_at`.
    pub remaining_secs: u64,
    /// Verified claims.
    pub claims: AccessToken,
}

/// Verifies `token` with the manager's secret and clock.
pub fn verify_token(manager: &JwtManager, token: &str) -> BinResult<Verification> {
    let claims = manager.validate_token(token.trim())?;
    let verified_at = manager.clock().now();
    let remaining_secs = claims
        .remaining(verified_at)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    Ok(Verification {
        valid: true,
        verified_at,
        remaining_secs,
        claims,
    })
}

/// Executes the `verify` command.
pub fn verify(cli: &Cli, config: &WardenConfig, args: &VerifyArgs) -> BinResult<()> {
    let clock: Arc<dyn Clock> = match args.at {
        Some(at) => Arc::new(FixedClock::at(at)),
        None => Arc::new(SystemClock),
    };
    let manager = jwt_manager(cli, config, clock)?;
    let verification = verify_token(&manager, &args.token)?;

    match args.format {
        OutputFormat::Text => {
            let claims = &verification.claims;
            println!("✓ Token is valid");
            println!("  Access key: {}", claims.access_key);
            println!("  Scope:      {}", claims.scope);
            println!(
                "  Expires at: {} ({})",
                claims.expires_at,
                format_timestamp(claims.expires_at)
            );
            println!("  Remaining:  {}s", verification.remaining_secs);
            Ok(())
        }
        OutputFormat::Json => print_json(&verification),
    }
}

#[cfg(test)]
mod tests {
    use warden_api::{ApiError, JwtConfig};
    use warden_core::TokenError;

    use super::*;
    use crate::error::BinError;

    const GOLDEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                          eyJzY29wZSI6ImtjdCIsImV4cCI6MTU4MDYwMTYwMCwic3ViIjoibGlhbSJ9.\
                          sc9USQiMoxCPmfQ7ROaofBPkV2E90EE1HUwRkLB9cnE";

    fn manager_at(now: i64) -> JwtManager {
        JwtManager::with_clock(JwtConfig::new("secret"), Arc::new(FixedClock::at(now))).unwrap()
    }

    #[test]
    fn test_verify_at_expiry() {
        let verification = verify_token(&manager_at(1_580_601_600), GOLDEN).unwrap();
        assert!(verification.valid);
        assert_eq!(verification.remaining_secs, 0);
        assert_eq!(verification.claims.access_key, "liam");
    }

    #[test]
    fn test_verify_remaining() {
        let verification = verify_token(&manager_at(1_580_601_000), GOLDEN).unwrap();
        assert_eq!(verification.remaining_secs, 600);
    }

    #[test]
    fn test_verify_trims_whitespace() {
        let input = format!("{GOLDEN}\n");
        assert!(verify_token(&manager_at(1_580_601_600), &input).is_ok());
    }

    #[test]
    fn test_verify_expired() {
        let err = verify_token(&manager_at(1_580_601_601), GOLDEN).unwrap_err();
        assert!(matches!(
            err,
            BinError::Api(ApiError::Token(TokenError::Expired { .. }))
        ));
        assert_eq!(err.to_string(), "Token error: token is expired by 1s");
        assert_eq!(err.exit_code(), 5);
    }
}
