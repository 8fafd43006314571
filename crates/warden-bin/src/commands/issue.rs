// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `issue` command.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use warden_api::JwtManager;
use warden_config::WardenConfig;
use warden_core::{AccessToken, SystemClock};

use super::{format_timestamp, jwt_manager, print_json};
use crate::cli::{Cli, IssueArgs, OutputFormat};
use crate::error::BinResult;

/// A freshly signed token with its claims.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// Compact token.
    pub token: String,
    /// Claims the token carries.
    #[serde(flatten)]
    pub claims: AccessToken,
}

/// Builds the claims described by `args` and signs them.
pub fn issue_token(manager: &JwtManager, args: &IssueArgs) -> BinResult<IssuedToken> {
    let claims = match args.expires_at {
        Some(expires_at) => AccessToken::new(args.access_key.as_str(), expires_at, args.scope.as_str()),
        None => AccessToken::expiring_in(
            args.access_key.as_str(),
            args.scope.as_str(),
            args.expires_in.unwrap_or_else(|| manager.expiration_secs()),
            manager.clock(),
        ),
    };

    let token = manager.create_token(&claims)?;
    Ok(IssuedToken { token, claims })
}

/// Executes the `issue` command.
pub fn issue(cli: &Cli, config: &WardenConfig, args: &IssueArgs) -> BinResult<()> {
    let manager = jwt_manager(cli, config, Arc::new(SystemClock))?;
    let issued = issue_token(&manager, args)?;

    info!(
        access_key = %issued.claims.access_key,
        expires_at = issued.claims.expires_at,
        "Token issued"
    );

    match args.format {
        OutputFormat::Text => {
            println!("{}", issued.token);
            if cli.is_verbose() {
                eprintln!(
                    "  expires at {}",
                    format_timestamp(issued.claims.expires_at)
                );
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&issued),
    }
}
