// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared fixtures for driving the launcher binary.
//!
//! A fixture is a temporary directory holding a `bin/` directory used as the
//! whole `PATH` and a `project/` directory used as the working directory. The
//! fake `streamlit` appends its arguments to a record file, followed by a
//! `---` separator per invocation, and exits with `$FAKE_STREAMLIT_EXIT`.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const APP_PATH: &str = "src/ui/workflow_app.py";

pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Empty `bin/` and `project/` directories.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("bin")).unwrap();
        fs::create_dir(dir.path().join("project")).unwrap();
        Self { dir }
    }

    /// Fake streamlit installed and application file present.
    pub fn ready() -> Self {
        let fixture = Self::new();
        fixture.install_streamlit();
        fixture.install_app();
        fixture
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    pub fn project(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn record(&self) -> PathBuf {
        self.dir.path().join("streamlit-invocations.txt")
    }

    pub fn install_streamlit(&self) {
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" >> '{record}'\necho '---' >> '{record}'\nexit \"${{FAKE_STREAMLIT_EXIT:-0}}\"\n",
            record = self.record().display()
        );
        write_executable(&self.bin().join("streamlit"), &script);
    }

    pub fn install_app(&self) {
        let app = self.project().join(APP_PATH);
        fs::create_dir_all(app.parent().unwrap()).unwrap();
        fs::write(app, "import streamlit as st\n").unwrap();
    }

    /// Launcher command with an active virtual environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_run-workflow-ui"));
        cmd.current_dir(self.project())
            .env("PATH", self.bin())
            .env("VIRTUAL_ENV", self.dir.path().join("venv"))
            .env_remove("FAKE_STREAMLIT_EXIT");
        cmd
    }

    /// Recorded invocations of the fake streamlit, one argument list each.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        let Ok(text) = fs::read_to_string(self.record()) else {
            return Vec::new();
        };
        text.split_terminator("---\n")
            .map(|block| block.lines().map(str::to_string).collect())
            .collect()
    }
}

fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
