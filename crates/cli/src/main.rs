// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Procurement Workflow UI launcher binary entry point.

use clap::Parser;

use workflow_ui_launcher::cli::Cli;
use workflow_ui_launcher::failure::exit_codes;
use workflow_ui_launcher::output::print_error;
use workflow_ui_launcher::{run, HostEnv, LaunchConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse();

    let host = match HostEnv::capture() {
        Ok(host) => host,
        Err(e) => {
            print_error(format_args!("Cannot determine working directory: {}", e));
            std::process::exit(exit_codes::ERROR);
        }
    };

    let code = run(&LaunchConfig::default(), &host).await;
    std::process::exit(code);
}
