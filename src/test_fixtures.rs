//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Unit tests across the crate need the same small environments over and
//! over: a temp directory, or a full backend/frontend project tree. These
//! helpers build them with a single call.

use std::path::Path;

use tempfile::TempDir;

/// Create a temp directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a package.json with the given content into `dir`.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_manifest(dir: &Path, content: &str) {
    std::fs::write(dir.join("package.json"), content).expect("Failed to write package.json");
}

/// Create a temp directory holding a complete project tree:
/// `backend/` (with package.json and server.js) and `frontend/`
/// (with package.json declaring a deploy script).
///
/// # Panics
///
/// Panics if any part of the tree cannot be created.
#[must_use]
pub fn create_project_tree() -> TempDir {
    let temp = create_temp_dir();

    let backend = temp.path().join("backend");
    std::fs::create_dir(&backend).expect("Failed to create backend directory");
    write_manifest(
        &backend,
        r#"{ "name": "backend", "main": "server.js", "scripts": { "start": "node server.js" } }"#,
    );
    std::fs::write(backend.join("server.js"), "// test server\n")
        .expect("Failed to write server.js");

    let frontend = temp.path().join("frontend");
    std::fs::create_dir(&frontend).expect("Failed to create frontend directory");
    write_manifest(
        &frontend,
        r#"{ "name": "frontend", "scripts": { "deploy": "gh-pages -d build" } }"#,
    );

    temp
}
