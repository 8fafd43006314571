// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Resolves resource descriptors against incoming requests.

use axum::{
    body::{to_bytes, Body},
    extract::Query,
    http::{HeaderMap, Request, Uri},
};
use serde_json::{Map, Value};

use super::descriptor::{ResourceDescriptor, ResourceSource};
use super::error::{ExtractError, ExtractResult};

/// Header whose value overrides any descriptor.
pub const RESOURCE_OVERRIDE_HEADER: &str = "x-krn";

/// Default maximum body size read by a body selector (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// ResourceExtractor
// =============================================================================

/// Resolves the resource identifier a request targets.
///
/// Resolution order:
///
/// 1. A non-empty `x-krn` header wins outright.
/// 2. A descriptor ending in `${source:name}` reads `name` from the body,
///    the query string or a header.
/// 3. Anything else is returned verbatim.
///
/// Missing values resolve to an empty string; callers decide whether an empty
/// resource is acceptable.
///
/// # Example
///
/// ```rust
/// use axum::{body::Body, http::Request};
/// use warden_api::resource::ResourceExtractor;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut req = Request::builder()
///     .uri("/api?krn=krn:wallet:1234:1234")
///     .body(Body::empty())
///     .unwrap();
///
/// let krn = ResourceExtractor::new().extract(&mut req, "${query:krn}").await.unwrap();
/// assert_eq!(krn, "krn:wallet:1234:1234");
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceExtractor {
    body_limit: usize,
}

impl Default for ResourceExtractor {
    fn default() -> Self {
        Self {
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ResourceExtractor {
    /// Creates an extractor with the default body limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum body size read by a body selector.
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    /// Returns the body limit in bytes.
    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    /// Resolves `descriptor` against `req`.
    ///
    /// A body selector consumes the request body and leaves an empty one in
    /// its place. Every other path leaves the request untouched.
    pub async fn extract(&self, req: &mut Request<Body>, descriptor: &str) -> ExtractResult<String> {
        if let Some(krn) = override_value(req.headers()) {
            tracing::trace!(krn = %krn, "Resource taken from override header");
            return Ok(krn);
        }

        match ResourceDescriptor::parse(descriptor) {
            ResourceDescriptor::Literal(literal) => Ok(literal.to_string()),
            ResourceDescriptor::Selector { source, name } => match source.parse()? {
                ResourceSource::Body => self.body_value(req, name).await,
                ResourceSource::Query => Ok(query_value(req.uri(), name)),
                ResourceSource::Header => Ok(header_value(req.headers(), name)),
            },
        }
    }

    async fn body_value(&self, req: &mut Request<Body>, name: &str) -> ExtractResult<String> {
        let body = std::mem::take(req.body_mut());
        let bytes = to_bytes(body, self.body_limit)
            .await
            .map_err(|e| ExtractError::body_decoding(e.to_string()))?;

        let object: Map<String, Value> = serde_json::from_slice(&bytes)
            .map_err(|e| ExtractError::body_decoding(e.to_string()))?;

        match object.get(name) {
            None => Ok(String::new()),
            Some(Value::String(value)) => Ok(value.clone()),
            Some(other) => Err(ExtractError::field_type(name, json_kind(other))),
        }
    }
}

/// Resolves `descriptor` against `req` with the default body limit.
pub async fn extract_resource(req: &mut Request<Body>, descriptor: &str) -> ExtractResult<String> {
    ResourceExtractor::default().extract(req, descriptor).await
}

// =============================================================================
// Sources
// =============================================================================

fn override_value(headers: &HeaderMap) -> Option<String> {
    Some(header_value(headers, RESOURCE_OVERRIDE_HEADER)).filter(|krn| !krn.is_empty())
}

fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default()
}

fn query_value(uri: &Uri, name: &str) -> String {
    Query::<Vec<(String, String)>>::try_from_uri(uri)
        .ok()
        .and_then(|Query(pairs)| {
            pairs
                .into_iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value)
        })
        .unwrap_or_default()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Tests
// =============================================================================
