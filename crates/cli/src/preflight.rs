// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Preflight checks run before the UI server is started.
//!
//! Three checks run in a fixed order: active virtual environment, UI tool on
//! `PATH`, application file under the project root. The first failure stops
//! the run. Each check is a free function so it can be evaluated on its own.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::LaunchConfig;
use crate::env::HostEnv;
use crate::output::write_status;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreflightError {
    #[error("Virtual environment is not activated")]
    EnvironmentNotActive,

    #[error("{tool} is not installed or not on PATH")]
    ToolNotInstalled { tool: String, install_hint: String },

    #[error("{} not found", .path.display())]
    TargetFileMissing { path: PathBuf },
}

impl PreflightError {
    /// Lines telling the user how to fix the failed precondition.
    pub fn remediation(&self) -> Vec<String> {
        match self {
            PreflightError::EnvironmentNotActive => vec![
                "Activate it first: source venv/bin/activate".to_string(),
                "Then re-run this launcher.".to_string(),
            ],
            PreflightError::ToolNotInstalled { install_hint, .. } => {
                vec![format!("Install it with: {}", install_hint)]
            }
            PreflightError::TargetFileMissing { .. } => {
                vec!["Run this launcher from the project root directory.".to_string()]
            }
        }
    }
}

/// Outcome of a fully passed preflight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreflightReport {
    /// Path of the active virtual environment
    pub virtual_env: PathBuf,
    /// Resolved location of the UI tool
    pub tool_path: PathBuf,
    /// Resolved location of the application file
    pub app_file: PathBuf,
}

/// Check that a virtual environment is active.
///
/// An empty marker value counts as not active.
pub fn check_environment(marker: Option<&str>) -> Result<PathBuf, PreflightError> {
    match marker {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(PreflightError::EnvironmentNotActive),
    }
}

/// Search each directory of a `PATH` value for an executable named `tool`.
///
/// Empty entries are skipped.
pub fn find_on_path(tool: &str, path_value: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_value)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, tool))
        .find(|candidate| is_executable(candidate))
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    ["", "exe", "cmd", "bat"]
        .iter()
        .map(|ext| dir.join(tool).with_extension(ext))
        .collect()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Check that the UI tool is on `PATH`, returning its resolved location.
pub fn check_tool(
    config: &LaunchConfig,
    path_value: Option<&OsStr>,
) -> Result<PathBuf, PreflightError> {
    path_value
        .and_then(|value| find_on_path(&config.tool, value))
        .ok_or_else(|| PreflightError::ToolNotInstalled {
            tool: config.tool.clone(),
            install_hint: config.install_hint.clone(),
        })
}

/// Check that the application file exists under `project_root`.
///
/// A directory at that path does not count.
pub fn check_target_file(
    config: &LaunchConfig,
    project_root: &Path,
) -> Result<PathBuf, PreflightError> {
    let app_file = project_root.join(&config.app_path);
    if app_file.is_file() {
        Ok(app_file)
    } else {
        Err(PreflightError::TargetFileMissing {
            path: config.app_path.clone(),
        })
    }
}

/// Run all checks in order, writing a status line for each one that passes.
pub fn run_preflight<W: Write>(
    config: &LaunchConfig,
    host: &HostEnv,
    out: &mut W,
    is_terminal: bool,
) -> Result<PreflightReport, PreflightError> {
    let virtual_env = check_environment(host.virtual_env.as_deref())?;
    write_status(
        out,
        format_args!("Virtual environment active: {}", virtual_env.display()),
        is_terminal,
    );

    let tool_path = check_tool(config, host.path.as_deref())?;
    write_status(
        out,
        format_args!("{} found: {}", config.tool, tool_path.display()),
        is_terminal,
    );

    let app_file = check_target_file(config, &host.project_root)?;
    write_status(
        out,
        format_args!("Found {}", config.app_path.display()),
        is_terminal,
    );

    Ok(PreflightReport {
        virtual_env,
        tool_path,
        app_file,
    })
}

#[cfg(test)]
#[path = "preflight_tests.rs"]
mod tests;
