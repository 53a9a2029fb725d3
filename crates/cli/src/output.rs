// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status lines, startup banner and diagnostics.
//!
//! Status output goes to stdout, diagnostics to stderr. Every printer has a
//! writer-based counterpart taking an explicit terminal flag so the text can
//! be checked without a TTY.

use std::io::{self, IsTerminal, Write};

use crate::config::LaunchConfig;

/// Print an error message to stderr.
///
/// Uses red ANSI color when stderr is a terminal.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, &[] as &[&str], is_tty);
}

/// Print an error followed by remediation lines to stderr.
pub fn print_error_with_hints<S: AsRef<str>>(msg: impl std::fmt::Display, hints: &[S]) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, hints, is_tty);
}

/// Write an error message and its hints to a writer with explicit terminal flag.
///
/// Hints are indented two spaces and never colored.
pub fn write_error<W: Write, S: AsRef<str>>(
    writer: &mut W,
    msg: impl std::fmt::Display,
    hints: &[S],
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
    for hint in hints {
        let _ = writeln!(writer, "  {}", hint.as_ref());
    }
}

/// Print a warning message to stderr.
///
/// Uses yellow ANSI color when stderr is a terminal.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Write a passed-check line (`✓ ...`), green on a terminal.
pub fn write_status<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[32m✓\x1b[0m {}", msg);
    } else {
        let _ = writeln!(writer, "✓ {}", msg);
    }
}

/// Render the banner printed right before the server starts.
pub fn render_banner(config: &LaunchConfig) -> String {
    format!(
        "Starting {}...\n  URL: {}\n  Press Ctrl+C to stop",
        config.service_name,
        config.url()
    )
}

/// Write the startup banner, surrounded by blank lines.
pub fn write_banner<W: Write>(writer: &mut W, config: &LaunchConfig) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", render_banner(config));
    let _ = writeln!(writer);
    let _ = writer.flush();
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
