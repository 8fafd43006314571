// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `inspect` command.

use serde::Serialize;
use tracing::warn;
use warden_api::ApiError;
use warden_core::{decode_unverified, AccessToken, Clock, SystemClock};

use super::{format_timestamp, print_json};
use crate::cli::{InspectArgs, OutputFormat};
use crate::error::BinResult;

/// Claims read from a token without verification.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    /// Always `false`; the signature was not checked.
    pub verified: bool,
    /// Whether `expires_at` has passed at `inspected_at`.
    pub expired: bool,
    /// Instant the expiry status refers to.
    pub inspected_at: i64,
    /// Unverified claims.
    pub claims: AccessToken,
}

/// Reads the claims of `token` and reports its expiry status at `clock`.
pub fn inspect_token(token: &str, clock: &dyn Clock) -> BinResult<Inspection> {
    let claims = decode_unverified(token.trim()).map_err(ApiError::from)?;
    let inspected_at = clock.now();

    Ok(Inspection {
        verified: false,
        expired: claims.is_expired_at(inspected_at),
        inspected_at,
        claims,
    })
}

/// Executes the `inspect` command.
pub fn inspect(args: &InspectArgs) -> BinResult<()> {
    let inspection = inspect_token(&args.token, &SystemClock)?;
    warn!("Token claims shown without signature verification");

    match args.format {
        OutputFormat::Text => {
            let claims = &inspection.claims;
            println!("⚠ UNVERIFIED: signature and expiry were not checked");
            println!("  Access key: {}", claims.access_key);
            println!("  Scope:      {}", claims.scope);
            println!(
                "  Expires at: {} ({}){}",
                claims.expires_at,
                format_timestamp(claims.expires_at),
                if inspection.expired { " [expired]" } else { "" }
            );
            Ok(())
        }
        OutputFormat::Json => print_json(&inspection),
    }
}
