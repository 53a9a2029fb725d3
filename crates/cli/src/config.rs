// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Launch parameters for the Procurement Workflow UI.

use std::path::PathBuf;

/// UI framework command-line tool
pub const DEFAULT_TOOL: &str = "streamlit";
/// Install command shown when the tool is missing
pub const DEFAULT_INSTALL_HINT: &str = "pip install streamlit";
/// Application file, relative to the project root
pub const DEFAULT_APP_PATH: &str = "src/ui/workflow_app.py";
/// Port the UI server listens on
pub const DEFAULT_PORT: u16 = 8501;
/// Host shown in the startup banner URL
pub const DEFAULT_HOST: &str = "localhost";
/// Human-readable service name
pub const DEFAULT_SERVICE_NAME: &str = "Procurement Workflow UI";

/// Fixed parameters of a launch.
///
/// The binary always runs with [`LaunchConfig::default`]; the builder methods
/// exist for library callers and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Executable looked up on `PATH` and delegated to
    pub tool: String,
    /// Remediation shown when the tool is missing
    pub install_hint: String,
    /// Target application file, relative to the project root
    pub app_path: PathBuf,
    pub port: u16,
    pub host: String,
    pub service_name: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            install_hint: DEFAULT_INSTALL_HINT.to_string(),
            app_path: PathBuf::from(DEFAULT_APP_PATH),
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl LaunchConfig {
    /// Set the delegated tool name
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Set the target application path
    pub fn with_app_path(mut self, app_path: impl Into<PathBuf>) -> Self {
        self.app_path = app_path.into();
        self
    }

    /// Set the server port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// URL the server is reachable at once started.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Arguments passed to the delegated tool.
    ///
    /// Streamlit takes the script after `run` and the port as a
    /// `--server.port` flag.
    pub fn tool_args(&self) -> Vec<String> {
        vec![
            "run".to_string(),
            self.app_path.display().to_string(),
            "--server.port".to_string(),
            self.port.to_string(),
        ]
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
