// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exit codes and mapping of the server's exit status.

use std::process::ExitStatus;

/// Exit codes produced by the launcher itself
pub mod exit_codes {
    /// Successful execution
    pub const SUCCESS: i32 = 0;
    /// Precondition unmet or server could not be started
    pub const ERROR: i32 = 1;
    /// Base added to a signal number when the server was killed by one
    pub const SIGNAL_BASE: i32 = 128;
}

/// Exit code to forward for the delegated process's status.
///
/// A normal exit forwards its code; a signal-terminated process maps to
/// `128 + signal` as a shell would report it.
pub fn exit_code_for_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }
    exit_codes::ERROR
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
