// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Builders
//!
//! Builder for the HTTP requests the resource extractor and the axum
//! extractors are tested against.

use axum::body::Body;
use axum::http::{header, Method, Request};

// =============================================================================
// Request Builder
// =============================================================================

/// Builder for `Request<Body>` with sensible defaults.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    /// Create a new builder for `GET /`.
    pub fn new() -> Self {
        Self {
            method: Method::GET,
            uri: "/".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Create a builder for `GET uri`.
    pub fn get(uri: impl Into<String>) -> Self {
        Self::new().uri(uri)
    }

    /// Create a builder for `POST uri`.
    pub fn post(uri: impl Into<String>) -> Self {
        Self::new().method(Method::POST).uri(uri)
    }

    /// Set the method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the URI, including any query string.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add an `Authorization: Bearer` header.
    pub fn bearer(self, token: &str) -> Self {
        self.header(header::AUTHORIZATION.as_str(), format!("Bearer {token}"))
    }

    /// Set a JSON body and its content type.
    pub fn json(self, body: impl Into<String>) -> Self {
        self.header(header::CONTENT_TYPE.as_str(), "application/json")
            .raw_body(body.into().into_bytes())
    }

    /// Set raw body bytes.
    pub fn raw_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Build the request.
    pub fn build(self) -> Request<Body> {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }

        let body = self.body.map(Body::from).unwrap_or_default();
        builder.body(body).expect("Failed to build test request")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::post("/api?krn=a")
            .bearer("abc")
            .json("{}")
            .build();

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.uri().query(), Some("krn=a"));
        assert_eq!(req.headers()[header::AUTHORIZATION], "Bearer abc");
        assert_eq!(req.headers()[header::CONTENT_TYPE], "application/json");
    }
}
