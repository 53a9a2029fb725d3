// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::error::ErrorKind;
use clap::CommandFactory;

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parses_without_arguments() {
    assert!(Cli::try_parse_from(["run-workflow-ui"]).is_ok());
}

#[test]
fn rejects_positional_argument() {
    let err = Cli::try_parse_from(["run-workflow-ui", "src/ui/other_app.py"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn rejects_unknown_flag() {
    let err = Cli::try_parse_from(["run-workflow-ui", "--port", "9000"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn version_flag_is_recognized() {
    let err = Cli::try_parse_from(["run-workflow-ui", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn help_mentions_port() {
    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("8501"), "{}", help);
}
