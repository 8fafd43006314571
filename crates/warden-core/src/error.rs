// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Error types for the token codec.
//!
//! Every failure of [`encode`](crate::token::encode),
//! [`decode`](crate::token::decode) and
//! [`decode_unverified`](crate::token::decode_unverified) is reported as a
//! [`TokenError`]. Nothing in this crate logs or retries on error; the caller
//! decides what to do with it.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use warden_core::error::TokenError;
//!
//! let error = TokenError::expired(Duration::from_secs(1));
//! assert!(error.is_expired());
//! assert_eq!(error.to_string(), "token is expired by 1s");
//! ```

use std::time::Duration;
use thiserror::Error;

/// Result type alias for token operations.
pub type TokenResult<T> = Result<T, TokenError>;

// =============================================================================
// TokenError
// =============================================================================

/// Errors produced while encoding or decoding a compact token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token is not a three-segment compact string, or its header
    /// segment cannot be decoded.
    #[error("{reason}")]
    Malformed {
        /// Why the token was rejected.
        reason: String,
    },

    /// The payload segment is not a decodable claims record.
    #[error("{message}")]
    MalformedPayload {
        /// The underlying decoder message.
        message: String,
    },

    /// The header does not declare a signing algorithm.
    #[error("signing method (alg) is unspecified")]
    AlgorithmUnspecified,

    /// The header declares an algorithm other than HS256.
    #[error("signing method (alg) is unavailable: {algorithm}")]
    AlgorithmUnavailable {
        /// The algorithm name found in the header.
        algorithm: String,
    },

    /// The signature does not match the header and payload.
    #[error("signature is invalid")]
    InvalidSignature,

    /// The token expired before the verification instant.
    #[error("token is expired by {}s", .elapsed.as_secs())]
    Expired {
        /// Time elapsed since expiry, at one-second granularity.
        elapsed: Duration,
    },

    /// The claims could not be serialized or signed.
    #[error("failed to encode token: {message}")]
    Encoding {
        /// Error message.
        message: String,
    },
}

impl TokenError {
    /// Message used when the segment count is wrong.
    pub const INVALID_SEGMENT_COUNT: &'static str = "token contains an invalid number of segments";

    /// Creates a malformed token error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Creates a malformed token error for a wrong segment count.
    pub fn invalid_segment_count() -> Self {
        Self::malformed(Self::INVALID_SEGMENT_COUNT)
    }

    /// Creates a malformed payload error.
    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Creates an unavailable algorithm error.
    pub fn algorithm_unavailable(algorithm: impl Into<String>) -> Self {
        Self::AlgorithmUnavailable {
            algorithm: algorithm.into(),
        }
    }

    /// Creates an expired token error.
    pub fn expired(elapsed: Duration) -> Self {
        Self::Expired { elapsed }
    }

    /// Creates an encoding error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Returns `true` if the token was rejected only because it expired.
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }

    /// Returns `true` if the token failed structural parsing.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::MalformedPayload { .. })
    }

    /// Returns the error code for categorization.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "MALFORMED_TOKEN",
            Self::MalformedPayload { .. } => "MALFORMED_PAYLOAD",
            Self::AlgorithmUnspecified => "ALGORITHM_UNSPECIFIED",
            Self::AlgorithmUnavailable { .. } => "ALGORITHM_UNAVAILABLE",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::Expired { .. } => "TOKEN_EXPIRED",
            Self::Encoding { .. } => "ENCODING_ERROR",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
