// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `validate` command.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use warden_api::auth::RECOMMENDED_SECRET_LEN;
use warden_config::WardenConfig;

use super::print_json;
use crate::cli::{Cli, OutputFormat, ValidateArgs};
use crate::error::{BinError, BinResult};

/// Result of validating a configuration file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Always `true`; invalid files are reported as errors.
    pub valid: bool,
    /// Validated file.
    pub config_path: String,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
    /// Parsed configuration with the secret redacted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

/// Loads and validates the configuration at `path`.
pub fn validate_config(path: &Path, show_config: bool) -> BinResult<ValidationReport> {
    if !path.exists() {
        return Err(BinError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let config = warden_config::load_config(path)
        .map_err(|e| BinError::from(e).with_context("Configuration validation failed"))?;

    let config_value = if show_config {
        Some(redacted(&config)?)
    } else {
        None
    };

    Ok(ValidationReport {
        valid: true,
        config_path: path.display().to_string(),
        warnings: warnings(&config),
        config: config_value,
    })
}

fn warnings(config: &WardenConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    match &config.token.secret {
        None => warnings.push(
            "No token secret configured; issue and verify need WARDEN_SECRET or --secret"
                .to_string(),
        ),
        Some(secret) if secret.len() < RECOMMENDED_SECRET_LEN => warnings.push(format!(
            "Token secret is shorter than {} bytes",
            RECOMMENDED_SECRET_LEN
        )),
        Some(_) => {}
    }

    warnings
}

fn redacted(config: &WardenConfig) -> BinResult<Value> {
    let mut value = serde_json::to_value(config)
        .map_err(|e| BinError::runtime(format!("failed to serialize config: {}", e)))?;

    if let Some(secret) = value.pointer_mut("/token/secret") {
        if !secret.is_null() {
            *secret = Value::String("***".to_string());
        }
    }
    Ok(value)
}

/// Executes the `validate` command.
pub fn validate(cli: &Cli, args: &ValidateArgs) -> BinResult<()> {
    let report = validate_config(&cli.config, args.show_config)?;

    match args.format {
        OutputFormat::Text => {
            println!("✓ Configuration is valid: {}", report.config_path);

            if !report.warnings.is_empty() {
                println!();
                println!("Warnings:");
                for warning in &report.warnings {
                    println!("  ⚠ {}", warning);
                }
            }

            if let Some(config) = &report.config {
                println!();
                println!("Parsed configuration:");
                println!(
                    "{}",
                    serde_json::to_string_pretty(config)
                        .unwrap_or_else(|_| "(serialization error)".to_string())
                );
            }
        }
        OutputFormat::Json => print_json(&report)?,
    }

    if args.strict && !report.warnings.is_empty() {
        return Err(BinError::Configuration(format!(
            "Strict mode: {} warning(s) found",
            report.warnings.len()
        )));
    }

    Ok(())
}
