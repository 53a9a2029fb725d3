// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The launch pipeline: preflight, banner, delegation.

use std::io::{self, IsTerminal, Write};

use crate::config::LaunchConfig;
use crate::env::HostEnv;
use crate::failure::exit_codes;
use crate::launch::delegate;
use crate::output::{print_error, print_error_with_hints, write_banner};
use crate::preflight::run_preflight;

/// Run the launcher against `host`, returning the process exit code.
///
/// Precondition failures return [`exit_codes::ERROR`] without starting the
/// server; otherwise the server's own exit code is returned.
pub async fn run(config: &LaunchConfig, host: &HostEnv) -> i32 {
    let mut stdout = io::stdout();
    let is_tty = stdout.is_terminal();

    let report = match run_preflight(config, host, &mut stdout, is_tty) {
        Ok(report) => report,
        Err(e) => {
            let _ = stdout.flush();
            print_error_with_hints(&e, &e.remediation());
            return exit_codes::ERROR;
        }
    };

    write_banner(&mut stdout, config);

    match delegate(config, &report, &host.project_root).await {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
