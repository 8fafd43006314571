// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Compact token codec.
//!
//! Tokens use the three-segment compact form
//! `base64url(header) "." base64url(payload) "." base64url(signature)`
//! and are always signed with HMAC-SHA256. Any other algorithm declared by an
//! incoming token is rejected.
//!
//! # Examples
//!
//! ```
//! use warden_core::clock::FixedClock;
//! use warden_core::token::{decode, encode};
//! use warden_core::AccessToken;
//!
//! let token = AccessToken::new("liam", 1_580_601_600, "kct");
//! let signed = encode(&token, b"secret").unwrap();
//!
//! let decoded = decode(&signed, b"secret", &FixedClock::at(0)).unwrap();
//! assert_eq!(decoded, token);
//! ```

use std::time::Duration;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::{crypto, Algorithm, DecodingKey, EncodingKey};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{TokenError, TokenResult};
use crate::types::AccessToken;

/// The only algorithm this codec signs with or accepts.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Name of [`SIGNING_ALGORITHM`] as it appears in the header.
pub const SIGNING_ALGORITHM_NAME: &str = "HS256";

/// Token type declared in the header.
pub const TOKEN_TYPE: &str = "JWT";

/// Segment separator.
pub const SEPARATOR: char = '.';

// =============================================================================
// Wire Records
// =============================================================================

/// Token header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// Token type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl Header {
    /// Header written by [`encode`].
    pub fn hs256() -> Self {
        Self {
            alg: Some(SIGNING_ALGORITHM_NAME.to_string()),
            typ: Some(TOKEN_TYPE.to_string()),
        }
    }

    /// Checks that the header declares HS256.
    pub fn ensure_supported(&self) -> TokenResult<()> {
        let alg = match self.alg.as_deref() {
            None | Some("") => return Err(TokenError::AlgorithmUnspecified),
            Some(alg) => alg,
        };

        match alg.parse::<Algorithm>() {
            Ok(algorithm) if algorithm == SIGNING_ALGORITHM => Ok(()),
            _ => Err(TokenError::algorithm_unavailable(alg)),
        }
    }
}

/// Token payload.
///
/// Field order is part of the wire format: `scope`, then `exp`, then `sub`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authorization scope.
    #[serde(default)]
    pub scope: String,
    /// Expiry (Unix seconds).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub exp: i64,
    /// Subject.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub: String,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl From<&AccessToken> for Claims {
    fn from(token: &AccessToken) -> Self {
        Self {
            scope: token.scope.clone(),
            exp: token.expires_at,
            sub: token.access_key.clone(),
        }
    }
}

impl From<Claims> for AccessToken {
    fn from(claims: Claims) -> Self {
        Self {
            access_key: claims.sub,
            expires_at: claims.exp,
            scope: claims.scope,
        }
    }
}

// =============================================================================
// Segments
// =============================================================================

/// The three segments of a compact token, borrowed from the input.
#[derive(Debug, Clone, Copy)]
struct Segments<'a> {
    signing_input: &'a str,
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
}

impl<'a> Segments<'a> {
    fn split(token: &'a str) -> TokenResult<Self> {
        let mut parts = token.split(SEPARATOR);
        let (Some(header), Some(payload), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::invalid_segment_count());
        };

        Ok(Self {
            signing_input: &token[..header.len() + 1 + payload.len()],
            header,
            payload,
            signature,
        })
    }

    fn header(&self) -> TokenResult<Header> {
        decode_segment(self.header).map_err(TokenError::malformed)
    }

    fn claims(&self) -> TokenResult<Claims> {
        decode_segment(self.payload).map_err(TokenError::malformed_payload)
    }

    fn verify_signature(&self, secret: &[u8]) -> TokenResult<()> {
        let key = DecodingKey::from_secret(secret);
        let valid = crypto::verify(
            self.signature,
            self.signing_input.as_bytes(),
            &key,
            SIGNING_ALGORITHM,
        )
        .map_err(|_| TokenError::InvalidSignature)?;

        if valid {
            Ok(())
        } else {
            Err(TokenError::InvalidSignature)
        }
    }
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| e.to_string())?;
    serde_json::from_slice(&bytes).map_err(|e| e.to_string())
}

fn encode_segment<T: Serialize>(value: &T) -> TokenResult<String> {
    let json = serde_json::to_vec(value).map_err(|e| TokenError::encoding(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

// =============================================================================
// Codec
// =============================================================================

/// Encodes and signs a token with HMAC-SHA256.
///
/// An empty `secret` is accepted and yields a token anyone can forge; keeping
/// the secret non-empty is the caller's responsibility.
pub fn encode(token: &AccessToken, secret: &[u8]) -> TokenResult<String> {
    let header = encode_segment(&Header::hs256())?;
    let payload = encode_segment(&Claims::from(token))?;
    let signing_input = format!("{header}{SEPARATOR}{payload}");

    let key = EncodingKey::from_secret(secret);
    let signature = crypto::sign(signing_input.as_bytes(), &key, SIGNING_ALGORITHM)
        .map_err(|e| TokenError::encoding(e.to_string()))?;

    Ok(format!("{signing_input}{SEPARATOR}{signature}"))
}

/// Decodes a token, verifying its algorithm, signature and expiry.
///
/// Checks run in this order: segment count, header, algorithm, signature,
/// payload, expiry. The token is valid while `clock.now() <= expires_at`.
pub fn decode(token: &str, secret: &[u8], clock: &dyn Clock) -> TokenResult<AccessToken> {
    let segments = Segments::split(token)?;

    segments.header()?.ensure_supported()?;
    segments.verify_signature(secret)?;

    let claims = segments.claims()?;
    let now = clock.now();
    if now > claims.exp {
        let elapsed = now.abs_diff(claims.exp);
        return Err(TokenError::expired(Duration::from_secs(elapsed)));
    }

    Ok(claims.into())
}

/// Decodes a token without checking its algorithm, signature or expiry.
///
/// The result is NOT authenticated: anyone can produce a token that decodes
/// here. Use it only to inspect tokens on trusted, diagnostic paths and never
/// to make an authorization decision.
pub fn decode_unverified(token: &str) -> TokenResult<AccessToken> {
    let segments = Segments::split(token)?;
    segments.header()?;
    Ok(segments.claims()?.into())
}

// =============================================================================
// Tests
// =============================================================================
