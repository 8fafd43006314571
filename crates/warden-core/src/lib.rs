// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # warden-core
//!
//! Core types and the access token codec for Warden.
//!
//! This crate provides:
//!
//! - **Types**: [`AccessToken`], the claims carried by a bearer token
//! - **Token**: HMAC-SHA256 compact token [`encode`], [`decode`] and
//!   [`decode_unverified`]
//! - **Clock**: the [`Clock`] abstraction used for expiry checks
//! - **Error**: the [`TokenError`] taxonomy
//!
//! ## Example
//!
//! ```rust
//! use warden_core::{decode, encode, AccessToken, FixedClock, TokenError};
//!
//! let token = AccessToken::new("liam", 1_580_601_600, "kct");
//! let signed = encode(&token, b"secret").unwrap();
//!
//! // Still valid at the expiry instant.
//! let clock = FixedClock::at(1_580_601_600);
//! assert_eq!(decode(&signed, b"secret", &clock).unwrap(), token);
//!
//! // Expired one second later.
//! let err = decode(&signed, b"secret", &clock.advanced_by(1)).unwrap_err();
//! assert!(matches!(err, TokenError::Expired { .. }));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod clock;
pub mod error;
pub mod token;
pub mod types;

// =============================================================================
// Re-exports for convenience
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{TokenError, TokenResult};
pub use token::{decode, decode_unverified, encode, Claims, Header};
pub use types::AccessToken;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
