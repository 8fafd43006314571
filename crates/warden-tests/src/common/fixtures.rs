// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Fixtures
//!
//! Reference tokens and configuration documents shared by the integration
//! tests. Token fixtures are fixed byte strings; any change to the encoder
//! that alters them breaks compatibility with tokens already issued.

use warden_core::AccessToken;

// =============================================================================
// Token Fixtures
// =============================================================================

/// Secret the reference tokens are signed with.
pub const REFERENCE_SECRET: &[u8] = b"secret";

/// Expiry of the reference tokens (2020-02-02T00:00:00Z).
pub const REFERENCE_EXPIRES_AT: i64 = 1_580_601_600;

/// `{access_key: "liam", expires_at: REFERENCE_EXPIRES_AT, scope: "kct"}`
/// signed with [`REFERENCE_SECRET`].
pub const REFERENCE_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                                   eyJzY29wZSI6ImtjdCIsImV4cCI6MTU4MDYwMTYwMCwic3ViIjoibGlhbSJ9.\
                                   sc9USQiMoxCPmfQ7ROaofBPkV2E90EE1HUwRkLB9cnE";

/// The reference token with an extra `chain_id` claim in the payload.
pub const REFERENCE_TOKEN_WITH_CHAIN_ID: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzY29wZSI6ImtjdCIsImNoYWluX2lkIjoiMTAwMSIsImV4cCI6MTU4MDYwMTYwMCwic3ViIjoibGlhbSJ9.\
     5MkESRw1pj0xEaoNrmR0RK4zH7gXGkwDriU2ModmqYI";

/// Payload `{}` with a signature over `e30.e30`, for header-only tests.
pub const EMPTY_PAYLOAD_AND_SIGNATURE: &str = "e30.XmNK3GpH3Ys_7wsYBfq4C3M6goz71I7dTgUkuIa5lyQ";

/// Header segments declaring algorithms other than HS256.
pub const UNSUPPORTED_HEADERS: [(&str, &str); 4] = [
    ("eyJhbGciOiJIUzI1MSIsInR5cCI6IkpXVCJ9", "HS251"),
    ("eyJhbGciOiJIUzM4NCIsInR5cCI6IkpXVCJ9", "HS384"),
    ("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9", "RS256"),
    ("eyJhbGciOiJub25lIn0", "none"),
];

/// Header segments that declare no algorithm: `{}` and `{"alg":"","typ":"JWT"}`.
pub const UNSPECIFIED_HEADERS: [&str; 2] = ["e30", "eyJhbGciOiIiLCJ0eXAiOiJKV1QifQ"];

/// A secret long enough to pass the length recommendation.
pub const STRONG_SECRET: &str = "integration-test-secret-that-is-long-enough";

/// Fixture providing access tokens.
pub struct TokenFixtures;

impl TokenFixtures {
    /// The claims carried by [`REFERENCE_TOKEN`].
    pub fn reference() -> AccessToken {
        AccessToken::new("liam", REFERENCE_EXPIRES_AT, "kct")
    }

    /// A token with every field empty or zero.
    pub fn empty() -> AccessToken {
        AccessToken::new("", 0, "")
    }

    /// Tokens exercising unusual but valid field contents.
    pub fn unusual() -> Vec<AccessToken> {
        vec![
            AccessToken::new("user@example.com", 4_102_444_800, "read write admin"),
            AccessToken::new("한글", 1, "krn:wallet:*"),
            AccessToken::new("quote\"and\\slash", i64::MAX, ""),
        ]
    }
}

// =============================================================================
// Resource Fixtures
// =============================================================================

/// Resource identifier used across the extraction tests.
pub const WALLET_KRN: &str = "krn:wallet:1234:1234";

/// A JSON body carrying [`WALLET_KRN`] under `krn`.
pub const WALLET_BODY: &str = r#"{"krn": "krn:wallet:1234:1234"}"#;

// =============================================================================
// Configuration Fixtures
// =============================================================================

/// Fixture providing configuration documents.
pub struct ConfigFixtures;

impl ConfigFixtures {
    /// A full YAML configuration.
    pub fn yaml() -> &'static str {
        r#"
token:
  secret: "integration-test-secret-that-is-long-enough"
  expiration_secs: 900
  algorithm: HS256

resource:
  max_body_size: 4096

logging:
  level: debug
  format: json
"#
    }

    /// The same configuration as [`ConfigFixtures::yaml`] in TOML.
    pub fn toml() -> &'static str {
        r#"
[token]
secret = "integration-test-secret-that-is-long-enough"
expiration_secs = 900
algorithm = "HS256"

[resource]
max_body_size = 4096

[logging]
level = "debug"
format = "json"
"#
    }

    /// The same configuration as [`ConfigFixtures::yaml`] in JSON.
    pub fn json() -> &'static str {
        r#"{
  "token": {
    "secret": "integration-test-secret-that-is-long-enough",
    "expiration_secs": 900,
    "algorithm": "HS256"
  },
  "resource": { "max_body_size": 4096 },
  "logging": { "level": "debug", "format": "json" }
}"#
    }

    /// A YAML configuration with only a secret; everything else defaults.
    pub fn minimal_yaml() -> &'static str {
        "token:\n  secret: \"integration-test-secret-that-is-long-enough\"\n"
    }
}
