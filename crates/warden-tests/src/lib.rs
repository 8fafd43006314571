// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Warden Integration Tests
//!
//! Integration tests for the Warden token and resource toolkit, together with
//! the fixtures and helpers they share.
//!
//! ## Module Structure
//!
//! - [`common`]: Shared test utilities, fixtures, and helpers
//!   - `fixtures`: Reference tokens, secrets and configuration documents
//!   - `builders`: Builder for HTTP requests fed to the resource extractor
//!   - `assertions`: Assertion helpers for token and extraction errors
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p warden-tests
//!
//! # Run specific test suite
//! cargo test -p warden-tests --test integration_token
//! cargo test -p warden-tests --test integration_resource
//! cargo test -p warden-tests --test integration_config
//!
//! # Run with verbose output
//! cargo test -p warden-tests -- --nocapture
//! ```
//!
//! ## Test Categories
//!
//! ### Token Tests (`integration_token.rs`)
//! - Reference encodings and decodings
//! - Expiry boundary
//! - Algorithm, signature and segment failures
//! - Issuing through `JwtManager`
//!
//! ### Resource Tests (`integration_resource.rs`)
//! - Literal descriptors and selectors over body, query and header
//! - Override header precedence
//! - Extraction inside an axum router together with `Verified`
//!
//! ### Config Tests (`integration_config.rs`)
//! - Configuration parsing (YAML, TOML, JSON)
//! - Validation rules
//! - Environment overrides and placeholders
//!
//! ## Writing New Tests
//!
//! ```rust,ignore
//! use warden_tests::prelude::*;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let mut req = RequestBuilder::post("/api").json(r#"{"krn":"a"}"#).build();
//!     let resource = extract_resource(&mut req, "${body:krn}").await.unwrap();
//!     assert_eq!(resource, "a");
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod common;

/// Re-export commonly used items for convenience.
pub mod prelude {
    pub use crate::common::assertions::*;
    pub use crate::common::builders::*;
    pub use crate::common::fixtures::*;
    pub use warden_api::extract_resource;
}
