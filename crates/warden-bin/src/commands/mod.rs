// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! CLI command implementations.
//!
//! - `issue`: Sign a new access token
//! - `verify`: Verify a token and print its claims
//! - `inspect`: Print a token's claims without verifying it
//! - `resolve`: Resolve a resource descriptor
//! - `validate`: Validate configuration file
//! - `version`: Show version information

mod inspect;
mod issue;
mod resolve;
mod validate;
mod verify;
mod version;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use warden_api::{JwtConfig, JwtManager};
use warden_config::{ConfigLoader, WardenConfig};
use warden_core::Clock;

pub use inspect::{inspect, inspect_token, Inspection};
pub use issue::{issue, issue_token, IssuedToken};
pub use resolve::{build_request, parse_header, resolve, resolve_descriptor, Resolution};
pub use validate::{validate, validate_config, ValidationReport};
pub use verify::{verify, verify_token, Verification};
pub use version::version;

use crate::cli::{Cli, Commands};
use crate::error::{BinError, BinResult};

/// Executes the appropriate command based on CLI arguments.
///
/// `config` is the result of loading the configuration before logging was
/// initialised; commands that need it propagate its error.
pub async fn execute(cli: &Cli, config: BinResult<WardenConfig>) -> BinResult<()> {
    match &cli.command {
        Commands::Issue(args) => issue::issue(cli, &config?, args),
        Commands::Verify(args) => verify::verify(cli, &config?, args),
        Commands::Inspect(args) => inspect::inspect(args),
        Commands::Resolve(args) => resolve::resolve(&config?, args).await,
        Commands::Validate(args) => validate::validate(cli, args),
        Commands::Version => version::version(),
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Loads the configuration file, or defaults plus environment overrides when
/// the file does not exist.
pub fn load_config(cli: &Cli) -> BinResult<WardenConfig> {
    if cli.config.exists() {
        return Ok(warden_config::load_config(&cli.config)?);
    }

    debug!(
        path = %cli.config.display(),
        "Configuration file not found, using defaults"
    );
    let loader = ConfigLoader::new();
    let mut config = WardenConfig::default();
    loader.apply_overrides(&mut config, |name| std::env::var(name).ok())?;
    config.validate()?;
    Ok(config)
}

/// Returns the signing secret, preferring `--secret` over the config file.
pub fn signing_secret(cli: &Cli, config: &WardenConfig) -> BinResult<String> {
    cli.secret
        .clone()
        .or_else(|| config.token.secret.as_ref().map(|s| s.expose().to_string()))
        .filter(|secret| !secret.is_empty())
        .ok_or_else(|| {
            BinError::config("no signing secret; set token.secret, WARDEN_SECRET or --secret")
        })
}

/// Builds a token manager from the configuration.
pub fn jwt_manager(
    cli: &Cli,
    config: &WardenConfig,
    clock: Arc<dyn Clock>,
) -> BinResult<JwtManager> {
    let expiration_secs = i64::try_from(config.token.expiration_secs)
        .map_err(|_| BinError::config("token.expiration_secs is too large"))?;

    let jwt = JwtConfig {
        secret: signing_secret(cli, config)?,
        expiration_secs,
        algorithm: config.token.algorithm.clone(),
    };

    Ok(JwtManager::with_clock(jwt, clock)?)
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> BinResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| BinError::runtime(format!("failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Formats a Unix timestamp as RFC 3339, if representable.
pub fn format_timestamp(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "(out of range)".to_string())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use warden_config::SecretValue;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["warden", "-c", "/nonexistent/warden.yaml"];
        argv.extend_from_slice(args);
        argv.push("version");
        Cli::parse_from(argv)
    }

    #[test]
    fn test_signing_secret_precedence() {
        let mut config = WardenConfig::default();
        config.token.secret = Some(SecretValue::new("from-config"));

        assert_eq!(signing_secret(&cli(&[]), &config).unwrap(), "from-config");
        assert_eq!(
            signing_secret(&cli(&["--secret", "from-flag"]), &config).unwrap(),
            "from-flag"
        );

        config.token.secret = None;
        assert!(matches!(
            signing_secret(&cli(&[]), &config),
            Err(BinError::Configuration(_))
        ));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1_580_601_600), "2020-02-02T00:00:00+00:00");
    }
}
