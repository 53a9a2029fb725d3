// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Procurement Workflow UI launcher
//!
//! Checks the local environment before serving the Procurement Workflow UI
//! with Streamlit:
//!
//! 1. a virtual environment is active (`VIRTUAL_ENV` is set and non-empty),
//! 2. `streamlit` is on `PATH`,
//! 3. `src/ui/workflow_app.py` exists under the project root,
//!
//! then runs `streamlit run src/ui/workflow_app.py --server.port 8501` and
//! exits with the server's exit code. Any failed check exits with code 1
//! before the server is started.

pub mod cli;
pub mod config;
pub mod env;
pub mod failure;
pub mod launch;
pub mod output;
pub mod preflight;
pub mod runner;

pub use config::LaunchConfig;
pub use env::HostEnv;
pub use preflight::{PreflightError, PreflightReport};
pub use runner::run;
