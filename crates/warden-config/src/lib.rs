// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # warden-config
//!
//! Configuration management for Warden.
//!
//! ## Features
//!
//! - **Schema Definition**: token, resource and logging sections with validation
//! - **Multi-Format Support**: YAML, TOML, and JSON configuration files
//! - **Environment Overrides**: Override config values via environment variables
//!
//! ## Quick Start
//!
//! ```no_run
//! use warden_config::loader::load_config;
//!
//! let config = load_config("warden.yaml").unwrap();
//!
//! println!("Token lifetime: {}s", config.token.expiration_secs);
//! ```
//!
//! ## Environment Variables
//!
//! ```text
//! WARDEN_TOKEN_SECRET=change-me
//! WARDEN_LOG_LEVEL=debug
//! ```
//!
//! Values in config files can reference environment variables:
//!
//! ```yaml
//! token:
//!   secret: "${WARDEN_SECRET:dev-only-secret}"
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod loader;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    load_config, load_config_str, resolve_placeholders, ConfigFormat, ConfigLoader,
    ConfigLoaderBuilder, DEFAULT_ENV_PREFIX,
};
pub use schema::{
    LogFormat, LogLevel, LoggingConfig, ResourceConfig, SecretValue, TokenConfig, WardenConfig,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
