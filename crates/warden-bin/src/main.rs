// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Warden - access token and resource identifier toolkit
//!
//! Main binary entry point.

use warden_bin::{error::report_error_and_exit, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    if let Err(error) = warden_bin::run(cli).await {
        report_error_and_exit(error);
    }
}
