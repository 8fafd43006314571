// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `version` command.

use crate::error::BinResult;

/// Executes the `version` command to display version information.
pub fn version() -> BinResult<()> {
    println!("Warden - access token and resource identifier toolkit");
    println!();
    println!("Version Information:");
    println!("  warden-bin:    {}", crate::VERSION);
    println!("  warden-core:   {}", warden_core::VERSION);
    println!("  warden-api:    {}", warden_api::VERSION);
    println!("  warden-config: {}", warden_config::VERSION);
    println!();
    println!("Build Information:");
    println!("  Target:        {}", std::env::consts::ARCH);
    println!("  OS:            {}", std::env::consts::OS);
    println!();
    println!("Token Algorithm: {}", warden_core::token::SIGNING_ALGORITHM_NAME);
    println!();
    println!("License: PolyForm Noncommercial License 1.0.0");
    println!("Copyright (c) 2025 Sylvex. All rights reserved.");

    Ok(())
}
