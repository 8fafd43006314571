// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Custom Test Assertions
//!
//! Assertion helpers for the error taxonomies, with failure messages that
//! name the error code that was expected.

use std::fmt::Debug;

use warden_api::{ApiError, ExtractError};
use warden_core::TokenError;

// =============================================================================
// Token Assertions
// =============================================================================

/// Assert that `result` failed with a token error carrying `expected_code`.
///
/// Accepts both core results and API results wrapping a token error.
pub fn assert_token_error<T, E>(result: Result<T, E>, expected_code: &str) -> TokenError
where
    T: Debug,
    E: Into<TokenOrApi>,
{
    let err = match result {
        Ok(value) => panic!("Expected {expected_code}, but decoding succeeded: {value:?}"),
        Err(err) => err.into(),
    };

    match err {
        TokenOrApi::Token(err) | TokenOrApi::Api(ApiError::Token(err)) => {
            assert_eq!(
                err.error_code(),
                expected_code,
                "Expected {expected_code}, but got {err:?}"
            );
            err
        }
        TokenOrApi::Api(other) => {
            panic!("Expected token error {expected_code}, but got {other:?}")
        }
    }
}

/// Either error type a token operation can return.
#[derive(Debug)]
pub enum TokenOrApi {
    /// Error from `warden-core`.
    Token(TokenError),
    /// Error from `warden-api`.
    Api(ApiError),
}

impl From<TokenError> for TokenOrApi {
    fn from(err: TokenError) -> Self {
        TokenOrApi::Token(err)
    }
}

impl From<ApiError> for TokenOrApi {
    fn from(err: ApiError) -> Self {
        TokenOrApi::Api(err)
    }
}

// =============================================================================
// Extraction Assertions
// =============================================================================

/// Assert that `result` failed with an extraction error carrying `expected_code`.
pub fn assert_extract_error<T: Debug>(
    result: Result<T, ExtractError>,
    expected_code: &str,
) -> ExtractError {
    match result {
        Ok(value) => panic!("Expected {expected_code}, but extraction succeeded: {value:?}"),
        Err(err) => {
            assert_eq!(
                err.error_code(),
                expected_code,
                "Expected {expected_code}, but got {err:?}"
            );
            err
        }
    }
}

/// Assert that `result` resolved to `expected`.
pub fn assert_resolves_to(result: Result<String, ExtractError>, expected: &str) {
    match result {
        Ok(resource) => assert_eq!(
            resource, expected,
            "Expected resource {expected:?}, but got {resource:?}"
        ),
        Err(err) => panic!("Expected resource {expected:?}, but extraction failed: {err:?}"),
    }
}
