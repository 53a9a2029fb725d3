// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delegation to the UI framework's server process.

use std::path::Path;

use thiserror::Error;
use tokio::process::Command;

use crate::config::LaunchConfig;
use crate::failure::exit_code_for_status;
use crate::preflight::PreflightReport;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed waiting for {tool}: {source}")]
    Wait {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run the tool found by preflight until it exits, returning the exit code
/// the launcher should finish with.
///
/// The child inherits stdio and environment and runs in `project_root`, so the
/// relative application path resolves the same way it did during preflight.
pub async fn delegate(
    config: &LaunchConfig,
    report: &PreflightReport,
    project_root: &Path,
) -> Result<i32, LaunchError> {
    // Installed before spawning so an early Ctrl+C cannot orphan the server.
    let _interrupts = InterruptGuard::install();

    let mut child = Command::new(&report.tool_path)
        .args(config.tool_args())
        .current_dir(project_root)
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            tool: config.tool.clone(),
            source,
        })?;

    let status = child.wait().await.map_err(|source| LaunchError::Wait {
        tool: config.tool.clone(),
        source,
    })?;

    Ok(exit_code_for_status(status))
}

/// Keeps SIGINT from terminating the launcher while the server runs.
///
/// Ctrl+C reaches the server through the terminal's process group; the
/// launcher only has to survive long enough to forward the server's status.
/// Exec resets handlers, so the server keeps the default disposition.
struct InterruptGuard {
    #[cfg(unix)]
    id: Option<signal_hook::SigId>,
}

impl InterruptGuard {
    #[cfg(unix)]
    fn install() -> Self {
        use std::sync::atomic::AtomicBool;
        use std::sync::Arc;

        let flag = Arc::new(AtomicBool::new(false));
        match signal_hook::flag::register(signal_hook::consts::SIGINT, flag) {
            Ok(id) => Self { id: Some(id) },
            Err(e) => {
                crate::output::print_warning(format_args!("Failed to ignore SIGINT: {}", e));
                Self { id: None }
            }
        }
    }

    #[cfg(not(unix))]
    fn install() -> Self {
        Self {}
    }
}

#[cfg(unix)]
impl Drop for InterruptGuard {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            signal_hook::low_level::unregister(id);
        }
    }
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
