// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Custom extractors for API handlers.

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use warden_core::AccessToken;

use crate::auth::{bearer_token, JwtManager};
use crate::error::ApiError;

// =============================================================================
// Bearer Token Extractor
// =============================================================================

/// Extractor for the raw bearer token.
///
/// Returns 401 if the request carries no `Authorization: Bearer` header. The
/// token is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(&parts.headers)
            .map(|token| BearerToken(token.to_string()))
            .ok_or_else(|| ApiError::unauthorized("No authorization token provided"))
    }
}

// =============================================================================
// Verified Token Extractor
// =============================================================================

/// Extractor for a validated access token.
///
/// The [`JwtManager`] is taken from router state, so the state must provide an
/// `Arc<JwtManager>` through [`FromRef`].
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Verified(token): Verified) -> impl IntoResponse {
///     format!("Hello, {}", token.access_key)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified(pub AccessToken);

impl<S> FromRequestParts<S> for Verified
where
    Arc<JwtManager>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let manager = Arc::<JwtManager>::from_ref(state);

        let claims = manager.validate_token(&token).inspect_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
        })?;

        Ok(Verified(claims))
    }
}

// =============================================================================
// Tests
// =============================================================================
