// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by the launcher are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::ffi::OsString;
use std::path::PathBuf;

/// `VIRTUAL_ENV`: set by virtualenv/venv activation scripts.
///
/// Returned as-is; an empty value is the caller's concern.
pub fn virtual_env() -> Option<String> {
    std::env::var(names::VIRTUAL_ENV).ok()
}

/// `PATH`: executable search path.
pub fn path() -> Option<OsString> {
    std::env::var_os(names::PATH)
}

/// Snapshot of the process state the preflight checks read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostEnv {
    /// Value of the virtual environment marker, if set
    pub virtual_env: Option<String>,
    /// Value of `PATH`, if set
    pub path: Option<OsString>,
    /// Directory the application path is resolved against
    pub project_root: PathBuf,
}

impl HostEnv {
    /// Capture the current process environment and working directory.
    pub fn capture() -> std::io::Result<Self> {
        Ok(Self {
            virtual_env: virtual_env(),
            path: path(),
            project_root: std::env::current_dir()?,
        })
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
