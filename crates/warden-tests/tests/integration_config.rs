// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Configuration Integration Tests
//!
//! Integration tests for warden-config functionality including:
//!
//! - Loading YAML, TOML and JSON files
//! - Validation rules
//! - Environment overrides and placeholders
//!
//! ## Test Categories
//!
//! - `test_load_*`: File loading tests
//! - `test_validation_*`: Validation tests
//! - `test_env_*`: Override and placeholder tests

use std::collections::HashMap;
use std::time::Duration;

use warden_api::{JwtConfig, JwtManager};
use warden_config::{
    resolve_placeholders, ConfigError, ConfigFormat, ConfigLoader, LogFormat, LogLevel,
    WardenConfig,
};
use warden_tests::common::{temp_test_dir, write_file};
use warden_tests::prelude::*;

/// Loader that ignores the process environment.
fn loader() -> ConfigLoader {
    ConfigLoader::new().with_env_vars(false)
}

fn assert_fixture(config: &WardenConfig) {
    assert_eq!(
        config.token.secret.as_ref().map(|s| s.expose()),
        Some(STRONG_SECRET)
    );
    assert_eq!(config.token.expiration_secs, 900);
    assert_eq!(config.token.expiration(), Duration::from_secs(900));
    assert_eq!(config.resource.max_body_size, 4096);
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.format, LogFormat::Json);
}

// =============================================================================
// Loading Tests
// =============================================================================

#[test]
fn test_load_all_formats() {
    let dir = temp_test_dir("warden-config");

    for (name, content) in [
        ("warden.yaml", ConfigFixtures::yaml()),
        ("warden.yml", ConfigFixtures::yaml()),
        ("warden.toml", ConfigFixtures::toml()),
        ("warden.json", ConfigFixtures::json()),
    ] {
        let path = write_file(&dir, name, content);
        let config = loader().load(&path).unwrap();
        assert_fixture(&config);
    }
}

#[test]
fn test_load_minimal_uses_defaults() {
    let config = loader()
        .load_from_str(ConfigFixtures::minimal_yaml(), ConfigFormat::Yaml)
        .unwrap();

    assert_eq!(config.token.expiration_secs, 3600);
    assert_eq!(config.token.algorithm, "HS256");
    assert_eq!(config.resource.max_body_size, 1024 * 1024);
    assert_eq!(config.logging.level, LogLevel::Info);
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn test_load_missing_file() {
    let dir = temp_test_dir("warden-config");
    let err = loader().load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_load_unsupported_extension() {
    let dir = temp_test_dir("warden-config");
    let path = write_file(&dir, "warden.ini", "[token]\n");
    let err = loader().load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn test_load_parse_error_names_file() {
    let dir = temp_test_dir("warden-config");
    let path = write_file(&dir, "broken.toml", "[token\nsecret = ");

    let err = loader().load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_load_rejects_unknown_fields() {
    let err = loader()
        .load_from_str("token:\n  secrett: typo\n", ConfigFormat::Yaml)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Serialization { .. }));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validation_default_config_is_valid() {
    assert!(WardenConfig::default().validate().is_ok());
}

#[test]
fn test_validation_failures() {
    for (content, field) in [
        ("token:\n  expiration_secs: 0\n", "token.expiration_secs"),
        ("token:\n  algorithm: RS256\n", "token.algorithm"),
        ("token:\n  secret: \"\"\n", "token.secret"),
        ("resource:\n  max_body_size: 0\n", "resource.max_body_size"),
    ] {
        match loader().load_from_str(content, ConfigFormat::Yaml) {
            Err(ConfigError::Validation { field: actual, .. }) => assert_eq!(actual, field),
            other => panic!("Expected validation error for {field}, got {other:?}"),
        }
    }
}

#[test]
fn test_validation_secret_is_redacted() {
    let config = loader()
        .load_from_str(ConfigFixtures::yaml(), ConfigFormat::Yaml)
        .unwrap();

    let debug = format!("{:?}", config);
    assert!(!debug.contains(STRONG_SECRET));
    assert!(debug.contains("***"));
}

#[test]
fn test_validation_config_drives_jwt_manager() {
    let config = loader()
        .load_from_str(ConfigFixtures::toml(), ConfigFormat::Toml)
        .unwrap();

    let secret = config.token.secret.as_ref().unwrap().expose();
    let jwt = JwtConfig::new(secret).with_expiration(config.token.expiration());
    let manager = JwtManager::new(jwt).unwrap();

    assert_eq!(manager.expiration_secs(), 900);
}

// =============================================================================
// Environment Tests
// =============================================================================

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_env_overrides() {
    let vars = env(&[
        ("WARDEN_TOKEN_SECRET", "from-env"),
        ("WARDEN_TOKEN_EXPIRATION_SECS", " 60 "),
        ("WARDEN_RESOURCE_MAX_BODY_SIZE", "128"),
        ("WARDEN_LOG_LEVEL", "WARNING"),
    ]);
    let mut config = loader()
        .load_from_str(ConfigFixtures::yaml(), ConfigFormat::Yaml)
        .unwrap();

    loader()
        .apply_overrides(&mut config, |name| vars.get(name).cloned())
        .unwrap();

    assert_eq!(config.token.secret.as_ref().unwrap().expose(), "from-env");
    assert_eq!(config.token.expiration_secs, 60);
    assert_eq!(config.resource.max_body_size, 128);
    assert_eq!(config.logging.level, LogLevel::Warn);
}

#[test]
fn test_env_overrides_custom_prefix() {
    let vars = env(&[
        ("WARDEN_TOKEN_SECRET", "ignored"),
        ("GATE_TOKEN_SECRET", "from-gate"),
    ]);
    let mut config = WardenConfig::default();

    ConfigLoader::builder()
        .env_prefix("GATE")
        .build()
        .apply_overrides(&mut config, |name| vars.get(name).cloned())
        .unwrap();

    assert_eq!(config.token.secret.as_ref().unwrap().expose(), "from-gate");
}

#[test]
fn test_env_override_invalid_value() {
    let vars = env(&[("WARDEN_TOKEN_EXPIRATION_SECS", "an hour")]);
    let mut config = WardenConfig::default();

    let err = loader()
        .apply_overrides(&mut config, |name| vars.get(name).cloned())
        .unwrap_err();

    match err {
        ConfigError::InvalidEnvVar { name, .. } => {
            assert_eq!(name, "WARDEN_TOKEN_EXPIRATION_SECS")
        }
        other => panic!("Expected InvalidEnvVar, got {other:?}"),
    }
}

#[test]
fn test_env_placeholders() {
    let vars = env(&[("SIGNING_SECRET", STRONG_SECRET)]);
    let content = "token:\n  secret: \"${SIGNING_SECRET}\"\n  expiration_secs: ${TTL:120}\n";

    let resolved = resolve_placeholders(content, |name| vars.get(name).cloned());
    let config = loader()
        .load_from_str(&resolved, ConfigFormat::Yaml)
        .unwrap();

    assert_eq!(config.token.secret.as_ref().unwrap().expose(), STRONG_SECRET);
    assert_eq!(config.token.expiration_secs, 120);
}
