// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.
//!
//! The launcher takes no arguments; only `--help` and `--version` are
//! recognized. Anything else is a usage error reported by clap.

use clap::Parser;

/// Launch the Procurement Workflow UI
#[derive(Parser, Debug)]
#[command(
    name = "run-workflow-ui",
    version,
    about = "Launch the Procurement Workflow UI",
    long_about = "Checks that a virtual environment is active, that streamlit is \
                  installed and that src/ui/workflow_app.py exists, then serves \
                  the app on port 8501. Run from the project root."
)]
pub struct Cli {}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
