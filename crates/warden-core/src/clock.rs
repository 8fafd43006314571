// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Time sources for token expiry checks.
//!
//! Expiry is always evaluated against a [`Clock`] passed in by the caller.
//! Production code uses [`SystemClock`]; tests freeze time with
//! [`FixedClock`] so that concurrent tests never share a time override.

use std::sync::Arc;

// =============================================================================
// Clock
// =============================================================================

/// A source of the current time as Unix seconds.
pub trait Clock: Send + Sync {
    /// Returns the current Unix timestamp in seconds.
    fn now(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

// =============================================================================
// SystemClock
// =============================================================================

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

// =============================================================================
// FixedClock
// =============================================================================

/// A clock frozen at a single instant.
///
/// ```
/// use warden_core::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::at(1_580_601_600);
/// assert_eq!(clock.now(), 1_580_601_600);
/// assert_eq!(clock.advanced_by(1).now(), 1_580_601_601);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: i64,
}

impl FixedClock {
    /// Creates a clock that always reports `now`.
    pub const fn at(now: i64) -> Self {
        Self { now }
    }

    /// Returns a new clock moved forward (or backward) by `secs`.
    pub const fn advanced_by(self, secs: i64) -> Self {
        Self {
            now: self.now.saturating_add(secs),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.now
    }
}

// =============================================================================
// Tests
// =============================================================================
