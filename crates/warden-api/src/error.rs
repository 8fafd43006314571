// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API error types and handling.
//!
//! [`ApiError`] wraps token and resource failures and maps them to HTTP
//! status codes and JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use warden_core::TokenError;

use crate::resource::ExtractError;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// ApiError
// =============================================================================

/// API error type with HTTP status code mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unauthorized (401).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// Internal server error (500).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message (for logging, not user-facing).
        message: String,
    },

    /// Token rejected or could not be issued.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Resource identifier could not be resolved.
    #[error("Resource error: {0}")]
    Extract(#[from] ExtractError),
}

impl ApiError {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Token(TokenError::Encoding { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Token(_) => StatusCode::UNAUTHORIZED,
            ApiError::Extract(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Extract(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for categorization.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
            ApiError::Token(e) => e.error_code(),
            ApiError::Extract(e) => e.error_code(),
        }
    }

    /// Returns a user-friendly error message.
    ///
    /// This message is safe to show to end users and does not expose
    /// internal implementation details.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::BadRequest { message } => message.clone(),
            ApiError::Unauthorized { .. } => "인증이 필요합니다".to_string(),
            ApiError::Internal { .. } => "서버 내부 오류가 발생했습니다".to_string(),
            ApiError::Token(TokenError::Expired { .. }) => "토큰이 만료되었습니다".to_string(),
            ApiError::Token(TokenError::Encoding { .. }) => {
                "서버 내부 오류가 발생했습니다".to_string()
            }
            ApiError::Token(_) => "유효하지 않은 토큰입니다".to_string(),
            ApiError::Extract(e) if e.is_client_error() => {
                format!("요청에서 리소스를 확인할 수 없습니다: {}", e)
            }
            ApiError::Extract(_) => "서버 내부 오류가 발생했습니다".to_string(),
        }
    }

    /// Returns `true` if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.user_message();

        if self.is_server_error() {
            tracing::error!(
                error = %self,
                error_code = error_code,
                status = %status,
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                error_code = error_code,
                status = %status,
                "Client error occurred"
            );
        }

        let body = ErrorResponseBody {
            error: ErrorDetails {
                code: error_code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Error Response Body
// =============================================================================

/// Error response body structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseBody {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(TokenError::InvalidSignature).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(TokenError::encoding("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(ExtractError::field_type("krn", "number")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ExtractError::invalid_scheme("cookie")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes_pass_through() {
        assert_eq!(
            ApiError::from(TokenError::expired(Duration::from_secs(1))).error_code(),
            "TOKEN_EXPIRED"
        );
        assert_eq!(
            ApiError::from(ExtractError::body_decoding("eof")).error_code(),
            "BODY_DECODING_ERROR"
        );
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = ApiError::from(TokenError::InvalidSignature).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        let body: ErrorResponseBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.code, "INVALID_SIGNATURE");
        assert!(!body.error.message.is_empty());
    }

    #[tokio::test]
    async fn test_internal_message_hidden() {
        let response = ApiError::internal("secret is not configured").into_response();
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        let body: ErrorResponseBody = serde_json::from_slice(&bytes).unwrap();
        assert!(!body.error.message.contains("secret"));
    }
}
