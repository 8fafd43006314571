// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # warden-api
//!
//! HTTP-facing building blocks for Warden.
//!
//! This crate provides:
//!
//! - **Resource**: resolving the resource identifier a request targets
//!   ([`ResourceExtractor`], [`extract_resource`])
//! - **Auth**: issuing and validating access tokens ([`JwtManager`])
//! - **Extractors**: axum extractors for bearer and validated tokens
//! - **Error**: [`ApiError`] with HTTP status and JSON body mapping

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod auth;
pub mod error;
pub mod extractors;
pub mod resource;

// =============================================================================
// Re-exports for convenience
// =============================================================================

pub use auth::{bearer_token, JwtConfig, JwtManager};
pub use error::{ApiError, ApiResult, ErrorDetails, ErrorResponseBody};
pub use extractors::{BearerToken, Verified};
pub use resource::{
    extract_resource, ExtractError, ExtractResult, ResourceDescriptor, ResourceExtractor,
    ResourceSource,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
