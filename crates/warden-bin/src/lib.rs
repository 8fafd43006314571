// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # warden-bin
//!
//! CLI binary for Warden.
//!
//! This crate provides the `warden` binary, including:
//!
//! - CLI argument parsing with clap
//! - Logging initialization
//! - Command implementations (issue, verify, inspect, resolve, validate, version)
//!
//! ## Usage
//!
//! ```bash
//! # Issue a token valid for the configured lifetime
//! warden --secret "$SECRET" issue --access-key liam --scope kct
//!
//! # Verify a token as of a fixed instant
//! warden verify "$TOKEN" --at 1580601600
//!
//! # Resolve a resource identifier from a query parameter
//! warden resolve '${query:krn}' --uri '/api?krn=krn:wallet:1234:1234'
//!
//! # Validate configuration
//! warden -c /etc/warden/warden.yaml validate
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// =============================================================================
// Re-exports
// =============================================================================

pub use cli::{Cli, Commands};
pub use error::{BinError, BinResult};
pub use logging::init_logging;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Loads configuration, initializes logging and runs the selected command.
pub async fn run(cli: Cli) -> BinResult<()> {
    let config = commands::load_config(&cli);

    let (level, format) = match &config {
        Ok(config) => (
            cli.effective_log_level(config.logging.level.as_str()),
            cli.log_format.unwrap_or(config.logging.format.into()),
        ),
        Err(_) => (
            cli.effective_log_level("info"),
            cli.log_format.unwrap_or_default(),
        ),
    };
    init_logging(level, format);

    tracing::debug!(
        command = ?cli.command,
        config = %cli.config.display(),
        "Starting {} v{}",
        NAME,
        VERSION
    );

    commands::execute(&cli, config).await
}
