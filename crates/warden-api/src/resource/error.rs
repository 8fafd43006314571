// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Resource extraction errors.

use thiserror::Error;

/// Result type alias for resource extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors produced while resolving a resource descriptor against a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The request body is missing, too large, or not a JSON object.
    #[error("failed to decode request body: {message}")]
    BodyDecoding {
        /// The underlying reader or parser message.
        message: String,
    },

    /// The selected body field is present but is not a string.
    #[error("body field '{field}' must be a string, found {found}")]
    FieldType {
        /// The selected field name.
        field: String,
        /// The JSON kind found instead.
        found: &'static str,
    },

    /// The selector names a source other than `body`, `query` or `header`.
    #[error("invalid resource scheme: {scheme}")]
    InvalidScheme {
        /// The unrecognised source.
        scheme: String,
    },
}

impl ExtractError {
    /// Creates a body decoding error.
    pub fn body_decoding(message: impl Into<String>) -> Self {
        Self::BodyDecoding {
            message: message.into(),
        }
    }

    /// Creates a field type error.
    pub fn field_type(field: impl Into<String>, found: &'static str) -> Self {
        Self::FieldType {
            field: field.into(),
            found,
        }
    }

    /// Creates an invalid scheme error.
    pub fn invalid_scheme(scheme: impl Into<String>) -> Self {
        Self::InvalidScheme {
            scheme: scheme.into(),
        }
    }

    /// Returns the error code for categorization.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BodyDecoding { .. } => "BODY_DECODING_ERROR",
            Self::FieldType { .. } => "FIELD_TYPE_ERROR",
            Self::InvalidScheme { .. } => "INVALID_SCHEME",
        }
    }

    /// Returns `true` if the request itself is at fault, as opposed to the
    /// descriptor it was resolved against.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::InvalidScheme { .. })
    }
}
