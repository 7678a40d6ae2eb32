//! Common test utilities for devstack integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A test project tree (backend/ + frontend/) for integration tests
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new test project with both subprojects populated
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let project = Self { temp, path };

        project.write_file(
            "backend/package.json",
            r#"{ "name": "backend", "main": "server.js", "scripts": { "start": "node server.js" } }"#,
        );
        project.write_file("backend/server.js", "// test server\n");
        project.write_file(
            "frontend/package.json",
            r#"{ "name": "frontend", "scripts": { "deploy": "gh-pages -d build" } }"#,
        );

        project
    }

    /// Write a file in the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// Fake package-manager and server binaries on PATH
///
/// Each fake is a shell script that appends `<name> <args> :: <cwd>` to a
/// shared log file and exits. Tests assert the process-invocation facts
/// (which commands ran, in what order, in which directory) from that log.
#[cfg(unix)]
pub struct FakeBins {
    /// Directory holding the fake executables (prepended to PATH)
    pub dir: TempDir,
    /// Invocation log file
    pub log: PathBuf,
}

#[cfg(unix)]
impl FakeBins {
    /// Create fakes for npm, pnpm, yarn and node, all exiting 0
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create fake bin directory");
        let log = dir.path().join("invocations.log");
        let bins = Self { dir, log };

        for name in ["npm", "pnpm", "yarn", "node"] {
            bins.install(name, 0);
        }

        bins
    }

    /// Install (or replace) a fake executable with a fixed exit code
    pub fn install(&self, name: &str, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\necho \"{name} $* :: $PWD\" >> \"{log}\"\nexit {exit_code}\n",
            log = self.log.display(),
        );
        let path = self.dir.path().join(name);
        std::fs::write(&path, script).expect("Failed to write fake executable");

        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat fake executable")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to set executable bit");
    }

    /// PATH value with the fake bin directory first
    pub fn path_env(&self) -> String {
        format!(
            "{}:{}",
            self.dir.path().display(),
            std::env::var("PATH").unwrap_or_default()
        )
    }

    /// Recorded invocations, one line per external command run
    pub fn log_lines(&self) -> Vec<String> {
        if !self.log.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(&self.log)
            .expect("Failed to read invocation log")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
