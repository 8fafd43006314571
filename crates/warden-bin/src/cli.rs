// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! CLI argument parsing and command definitions.
//!
//! - `issue`: Sign a new access token
//! - `verify`: Verify a token's signature and expiry
//! - `inspect`: Show a token's claims without verifying it
//! - `resolve`: Resolve a resource descriptor against a synthetic request
//! - `validate`: Validate configuration file
//! - `version`: Show version information

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Main CLI Structure
// =============================================================================

/// Warden - access token and resource identifier toolkit
///
/// Issues and verifies HS256 access tokens and resolves the resource
/// identifier an HTTP request targets.
#[derive(Parser, Debug)]
#[command(
    name = "warden",
    author = "Sylvex <contact@sylvex.io>",
    version = warden_core::VERSION,
    about = "Access token and resource identifier toolkit",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        default_value = "warden.yaml",
        env = "WARDEN_CONFIG",
        global = true
    )]
    pub config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long, env = "WARDEN_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Log format (text, json, compact); overrides the config file
    #[arg(long, env = "WARDEN_LOG_FORMAT", global = true)]
    pub log_format: Option<LogFormat>,

    /// Enable quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Signing secret; overrides `token.secret` from the config file
    #[arg(long, env = "WARDEN_SECRET", global = true, hide_env_values = true)]
    pub secret: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

// =============================================================================
// Subcommands
// =============================================================================

/// Available subcommands for the Warden CLI.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sign a new access token
    Issue(IssueArgs),

    /// Verify a token and print its claims
    ///
    /// Checks the header, signature and expiry. Use `--at` to verify against
    /// a fixed instant instead of the current time.
    Verify(VerifyArgs),

    /// Print a token's claims without verifying it
    ///
    /// The output is not authenticated and must not be trusted.
    Inspect(InspectArgs),

    /// Resolve a resource descriptor against a request
    ///
    /// Builds a request from the given URI, headers and body and runs the
    /// resource extractor on it.
    Resolve(ResolveArgs),

    /// Validate the configuration file
    Validate(ValidateArgs),

    /// Show detailed version information
    Version,
}

// =============================================================================
// Command Arguments
// =============================================================================

/// Arguments for the `issue` command.
#[derive(Args, Debug, Clone)]
pub struct IssueArgs {
    /// Access key the token is issued to
    #[arg(long)]
    pub access_key: String,

    /// Scope granted by the token
    #[arg(long, default_value = "")]
    pub scope: String,

    /// Absolute expiry as Unix seconds
    #[arg(long, conflicts_with = "expires_in")]
    pub expires_at: Option<i64>,

    /// Lifetime in seconds; defaults to `token.expiration_secs`
    #[arg(long)]
    pub expires_in: Option<i64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the `verify` command.
#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Compact token to verify
    pub token: String,

    /// Verify as of this Unix time instead of now
    #[arg(long)]
    pub at: Option<i64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the `inspect` command.
#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Compact token to inspect
    pub token: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Resource descriptor, e.g. `*` or `${body:krn}`
    pub descriptor: String,

    /// Request URI including any query string
    #[arg(long, default_value = "/")]
    pub uri: String,

    /// Request method
    #[arg(short = 'X', long, default_value = "POST")]
    pub method: String,

    /// Request header as `name:value`; may be repeated
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Read the request body from a file
    #[arg(long, conflicts_with = "body")]
    pub body_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Show parsed configuration after validation
    #[arg(short, long)]
    pub show_config: bool,

    /// Output format for validation results
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

// =============================================================================
// Enums
// =============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
    /// Compact format for minimal output
    Compact,
}

impl From<warden_config::LogFormat> for LogFormat {
    fn from(format: warden_config::LogFormat) -> Self {
        match format {
            warden_config::LogFormat::Text => LogFormat::Text,
            warden_config::LogFormat::Json => LogFormat::Json,
            warden_config::LogFormat::Compact => LogFormat::Compact,
        }
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for programmatic parsing
    Json,
}

// =============================================================================
// Helper Methods
// =============================================================================

impl Cli {
    /// Parse CLI arguments from the command line.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Check if verbose logging is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Get the effective log level based on flags, falling back to
    /// `configured` when no level was given on the command line.
    pub fn effective_log_level<'a>(&'a self, configured: &'a str) -> &'a str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            self.log_level.as_deref().unwrap_or(configured)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["warden"]).is_err());
    }

    #[test]
    fn test_issue_command() {
        let cli = Cli::parse_from([
            "warden",
            "issue",
            "--access-key",
            "liam",
            "--scope",
            "kct",
            "--expires-at",
            "1580601600",
        ]);
        let Commands::Issue(args) = cli.command else {
            panic!("Expected Issue command");
        };
        assert_eq!(args.access_key, "liam");
        assert_eq!(args.scope, "kct");
        assert_eq!(args.expires_at, Some(1_580_601_600));
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_issue_expiry_options_conflict() {
        let result = Cli::try_parse_from([
            "warden",
            "issue",
            "--access-key",
            "liam",
            "--expires-at",
            "1",
            "--expires-in",
            "60",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_command() {
        let cli = Cli::parse_from(["warden", "verify", "a.b.c", "--at", "1580601601", "-f", "json"]);
        let Commands::Verify(args) = cli.command else {
            panic!("Expected Verify command");
        };
        assert_eq!(args.token, "a.b.c");
        assert_eq!(args.at, Some(1_580_601_601));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_command() {
        let cli = Cli::parse_from([
            "warden",
            "resolve",
            "${header:test}",
            "--uri",
            "/api?krn=x",
            "-H",
            "test: krn:wallet:1",
            "-H",
            "x-other: y",
        ]);
        let Commands::Resolve(args) = cli.command else {
            panic!("Expected Resolve command");
        };
        assert_eq!(args.descriptor, "${header:test}");
        assert_eq!(args.uri, "/api?krn=x");
        assert_eq!(args.method, "POST");
        assert_eq!(args.headers, vec!["test: krn:wallet:1", "x-other: y"]);
        assert!(args.body.is_none());
    }

    #[test]
    fn test_validate_command() {
        let cli = Cli::parse_from(["warden", "validate", "--show-config"]);
        let Commands::Validate(args) = cli.command else {
            panic!("Expected Validate command");
        };
        assert!(args.show_config);
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::parse_from([
            "warden",
            "version",
            "-c",
            "/etc/warden/warden.toml",
            "--secret",
            "s3cret",
            "--log-format",
            "json",
        ]);
        assert_eq!(cli.config, PathBuf::from("/etc/warden/warden.toml"));
        assert_eq!(cli.secret.as_deref(), Some("s3cret"));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["warden", "version"]);
        assert_eq!(cli.effective_log_level("error"), "error");

        let cli = Cli::parse_from(["warden", "-l", "debug", "version"]);
        assert_eq!(cli.effective_log_level("error"), "debug");
    }

    #[test]
    fn test_quiet_mode() {
        let cli = Cli::parse_from(["warden", "-q", "version"]);
        assert!(cli.quiet);
        assert_eq!(cli.effective_log_level("info"), "warn");
    }

    #[test]
    fn test_verbose_mode() {
        let cli = Cli::parse_from(["warden", "-v", "version"]);
        assert!(cli.is_verbose());
        assert_eq!(cli.effective_log_level("info"), "debug");
    }
}
