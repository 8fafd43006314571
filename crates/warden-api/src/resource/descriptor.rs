// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Resource descriptor parsing.
//!
//! A descriptor is either a literal resource identifier (`"*"`,
//! `"krn:wallet:1234"`) or a selector of the form `${source:name}` at the end
//! of the string, telling the extractor where in the request to look.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ExtractError;

static SELECTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([a-zA-Z0-9]+):([a-zA-Z0-9_-]+)\}$").expect("selector pattern is valid")
});

// =============================================================================
// ResourceSource
// =============================================================================

/// Where a selector reads the resource identifier from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceSource {
    /// A string field of the JSON object body.
    Body,
    /// A URL query parameter.
    Query,
    /// A request header.
    Header,
}

impl ResourceSource {
    /// Returns the selector keyword for this source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Query => "query",
            Self::Header => "header",
        }
    }
}

impl FromStr for ResourceSource {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "body" => Ok(Self::Body),
            "query" => Ok(Self::Query),
            "header" => Ok(Self::Header),
            other => Err(ExtractError::invalid_scheme(other)),
        }
    }
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ResourceDescriptor
// =============================================================================

/// A parsed resource descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceDescriptor<'a> {
    /// Used as the resource identifier unchanged.
    Literal(&'a str),
    /// Resolved against the request.
    ///
    /// `source` is kept as written; it is checked against [`ResourceSource`]
    /// only when the selector is resolved.
    Selector {
        /// Source keyword.
        source: &'a str,
        /// Field, parameter or header name.
        name: &'a str,
    },
}

impl<'a> ResourceDescriptor<'a> {
    /// Classifies a descriptor string.
    ///
    /// ```
    /// use warden_api::resource::ResourceDescriptor;
    ///
    /// assert_eq!(ResourceDescriptor::parse("*"), ResourceDescriptor::Literal("*"));
    /// assert_eq!(
    ///     ResourceDescriptor::parse("${body:krn}"),
    ///     ResourceDescriptor::Selector { source: "body", name: "krn" },
    /// );
    /// ```
    pub fn parse(descriptor: &'a str) -> Self {
        match SELECTOR.captures(descriptor) {
            Some(caps) => {
                let (_, [source, name]) = caps.extract();
                Self::Selector { source, name }
            }
            None => Self::Literal(descriptor),
        }
    }

    /// Returns `true` for selector descriptors.
    pub fn is_selector(&self) -> bool {
        matches!(self, Self::Selector { .. })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        for literal in ["*", "krn:wallet:1234:1234", "", "${body}", "${body:krn", "${:krn}"] {
            assert_eq!(
                ResourceDescriptor::parse(literal),
                ResourceDescriptor::Literal(literal)
            );
        }
    }

    #[test]
    fn test_selectors() {
        assert_eq!(
            ResourceDescriptor::parse("${query:wallet_id}"),
            ResourceDescriptor::Selector {
                source: "query",
                name: "wallet_id"
            }
        );
        assert_eq!(
            ResourceDescriptor::parse("${header:X-Wallet-Id}"),
            ResourceDescriptor::Selector {
                source: "header",
                name: "X-Wallet-Id"
            }
        );
    }

    #[test]
    fn test_selector_anchored_at_end() {
        assert_eq!(
            ResourceDescriptor::parse("krn:${body:krn}"),
            ResourceDescriptor::Selector {
                source: "body",
                name: "krn"
            }
        );
        assert!(!ResourceDescriptor::parse("${body:krn}/suffix").is_selector());
    }

    #[test]
    fn test_name_charset() {
        assert!(!ResourceDescriptor::parse("${body:a.b}").is_selector());
        assert!(!ResourceDescriptor::parse("${body:a b}").is_selector());
        assert!(ResourceDescriptor::parse("${header:x-krn_2}").is_selector());

        // Digits are ASCII only.
        assert_eq!(
            ResourceDescriptor::parse("${header:\u{0663}}"),
            ResourceDescriptor::Literal("${header:\u{0663}}")
        );
        assert!(!ResourceDescriptor::parse("${\u{0663}:krn}").is_selector());
        assert!(ResourceDescriptor::parse("${cookie:session}").is_selector());
    }

    #[test]
    fn test_source_from_str() {
        assert_eq!("body".parse::<ResourceSource>(), Ok(ResourceSource::Body));
        assert_eq!("query".parse::<ResourceSource>(), Ok(ResourceSource::Query));
        assert_eq!("header".parse::<ResourceSource>(), Ok(ResourceSource::Header));
        assert_eq!(
            "Body".parse::<ResourceSource>(),
            Err(ExtractError::invalid_scheme("Body"))
        );
        assert_eq!(ResourceSource::Header.to_string(), "header");
    }
}
