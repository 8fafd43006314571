// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Core value types.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;

// =============================================================================
// AccessToken
// =============================================================================

/// The claims carried by a bearer token.
///
/// An `AccessToken` is a plain value: it is built by the issuer, encoded
/// once, and reconstructed as a snapshot whenever a compact token is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessToken {
    /// Subject / principal identifier.
    pub access_key: String,
    /// Expiry as a Unix timestamp in seconds.
    pub expires_at: i64,
    /// Opaque authorization scope.
    pub scope: String,
}

impl AccessToken {
    /// Creates a new access token.
    pub fn new(access_key: impl Into<String>, expires_at: i64, scope: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            expires_at,
            scope: scope.into(),
        }
    }

    /// Creates a token that expires `ttl_secs` after the clock's current time.
    pub fn expiring_in(
        access_key: impl Into<String>,
        scope: impl Into<String>,
        ttl_secs: i64,
        clock: &dyn Clock,
    ) -> Self {
        Self::new(access_key, clock.now().saturating_add(ttl_secs), scope)
    }

    /// Returns `true` if the token is expired at `now`.
    ///
    /// The expiry instant itself is still valid.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expires_at
    }

    /// Returns the time left before expiry, or `None` once expired.
    pub fn remaining(&self, now: i64) -> Option<Duration> {
        if self.is_expired_at(now) {
            None
        } else {
            Some(Duration::from_secs(self.expires_at.abs_diff(now)))
        }
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (scope: {}, expires_at: {})",
            self.access_key, self.scope, self.expires_at
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
