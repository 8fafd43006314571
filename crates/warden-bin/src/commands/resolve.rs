// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `resolve` command.

use anyhow::Context;
use axum::body::Body;
use axum::http::Request;
use serde::Serialize;
use tracing::debug;
use warden_api::{ApiError, ResourceDescriptor, ResourceExtractor};
use warden_config::WardenConfig;

use super::print_json;
use crate::cli::{OutputFormat, ResolveArgs};
use crate::error::{BinError, BinResult};

/// A resolved resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Descriptor as given.
    pub descriptor: String,
    /// `literal` or `selector`.
    pub kind: &'static str,
    /// Resolved identifier; empty when the selected value is absent.
    pub resource: String,
}

/// Splits a `name:value` header argument.
pub fn parse_header(raw: &str) -> BinResult<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| BinError::input(format!("header '{}' is not in name:value form", raw)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(BinError::input(format!("header '{}' has an empty name", raw)));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Builds the request described by `args`.
pub fn build_request(args: &ResolveArgs) -> BinResult<Request<Body>> {
    let mut builder = Request::builder()
        .method(args.method.as_str())
        .uri(args.uri.as_str());

    for raw in &args.headers {
        let (name, value) = parse_header(raw)?;
        builder = builder.header(name, value);
    }

    let body = match (&args.body, &args.body_file) {
        (Some(body), _) => Body::from(body.clone()),
        (None, Some(path)) => {
            let content = std::fs::read(path)
                .with_context(|| format!("failed to read body from {}", path.display()))?;
            Body::from(content)
        }
        (None, None) => Body::empty(),
    };

    builder
        .body(body)
        .map_err(|e| BinError::input(format!("invalid request: {}", e)))
}

/// Resolves `descriptor` against `req`.
pub async fn resolve_descriptor(
    extractor: &ResourceExtractor,
    req: &mut Request<Body>,
    descriptor: &str,
) -> BinResult<Resolution> {
    let kind = if ResourceDescriptor::parse(descriptor).is_selector() {
        "selector"
    } else {
        "literal"
    };

    let resource = extractor
        .extract(req, descriptor)
        .await
        .map_err(ApiError::from)?;

    Ok(Resolution {
        descriptor: descriptor.to_string(),
        kind,
        resource,
    })
}

/// Executes the `resolve` command.
pub async fn resolve(config: &WardenConfig, args: &ResolveArgs) -> BinResult<()> {
    let mut req = build_request(args)?;
    let extractor = ResourceExtractor::new().with_body_limit(config.resource.max_body_size);

    debug!(
        uri = %req.uri(),
        headers = req.headers().len(),
        body_limit = extractor.body_limit(),
        "Resolving resource descriptor"
    );

    let resolution = resolve_descriptor(&extractor, &mut req, &args.descriptor).await?;

    match args.format {
        OutputFormat::Text => {
            println!("{}", resolution.resource);
            Ok(())
        }
        OutputFormat::Json => print_json(&resolution),
    }
}

#[cfg(test)]
mod tests {
    use warden_api::ExtractError;

    use super::*;

    fn args(descriptor: &str) -> ResolveArgs {
        ResolveArgs {
            descriptor: descriptor.to_string(),
            uri: "/".to_string(),
            method: "POST".to_string(),
            headers: Vec::new(),
            body: None,
            body_file: None,
            format: OutputFormat::Text,
        }
    }

    async fn run(args: &ResolveArgs) -> BinResult<Resolution> {
        let mut req = build_request(args)?;
        resolve_descriptor(&ResourceExtractor::new(), &mut req, &args.descriptor).await
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("test: krn:wallet:1234:1234").unwrap(),
            ("test".to_string(), "krn:wallet:1234:1234".to_string())
        );
        assert_eq!(
            parse_header("x-krn:abc").unwrap(),
            ("x-krn".to_string(), "abc".to_string())
        );
        assert!(matches!(parse_header("no-colon"), Err(BinError::Input(_))));
        assert!(matches!(parse_header(" :value"), Err(BinError::Input(_))));
    }

    #[tokio::test]
    async fn test_resolve_each_source() {
        let mut body = args("${body:krn}");
        body.body = Some(r#"{"krn":"krn:wallet:1234:1234"}"#.to_string());

        let mut query = args("${query:krn}");
        query.uri = "/api?krn=krn:wallet:1234:1234".to_string();

        let mut header = args("${header:test}");
        header.headers = vec!["test: krn:wallet:1234:1234".to_string()];

        for case in [body, query, header] {
            let resolution = run(&case).await.unwrap();
            assert_eq!(resolution.kind, "selector");
            assert_eq!(resolution.resource, "krn:wallet:1234:1234");
        }
    }

    #[tokio::test]
    async fn test_resolve_literal_and_override() {
        let resolution = run(&args("*")).await.unwrap();
        assert_eq!(resolution.kind, "literal");
        assert_eq!(resolution.resource, "*");

        let mut overridden = args("*");
        overridden.headers = vec!["x-krn: krn:wallet:9".to_string()];
        assert_eq!(run(&overridden).await.unwrap().resource, "krn:wallet:9");
    }

    #[tokio::test]
    async fn test_resolve_body_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{"krn":"from-file"}"#).unwrap();

        let mut from_file = args("${body:krn}");
        from_file.body_file = Some(file.path().to_path_buf());
        assert_eq!(run(&from_file).await.unwrap().resource, "from-file");

        from_file.body_file = Some("/nonexistent/body.json".into());
        assert!(matches!(run(&from_file).await, Err(BinError::Runtime(_))));
    }

    #[tokio::test]
    async fn test_resolve_errors() {
        let err = run(&args("${cookie:session}")).await.unwrap_err();
        assert!(matches!(
            err,
            BinError::Api(ApiError::Extract(ExtractError::InvalidScheme { .. }))
        ));
        assert_eq!(err.exit_code(), 6);

        let mut bad_uri = args("*");
        bad_uri.uri = "http://[::1".to_string();
        assert!(matches!(build_request(&bad_uri), Err(BinError::Input(_))));
    }
}
