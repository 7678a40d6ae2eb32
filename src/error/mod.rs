//! Error types and handling for devstack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`project`]: Project layout errors
//! - [`manifest`]: package.json errors
//! - [`process`]: External command errors

// Declare submodules
pub mod manifest;
pub mod process;
pub mod project;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use manifest::{
    not_found as manifest_not_found, parse_failed as manifest_parse_failed,
    read_failed as manifest_read_failed, script_missing,
};
#[allow(unused_imports)]
pub use process::{failed as command_failed, spawn_failed as command_spawn_failed};
#[allow(unused_imports)]
pub use project::{
    dir_not_found as project_dir_not_found, server_entry_missing, subproject_missing,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for devstack operations
#[derive(Error, Diagnostic, Debug)]
pub enum DevstackError {
    // Project layout errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(devstack::project::dir_not_found),
        help("Pass --project-dir pointing at the application root")
    )]
    ProjectDirNotFound { path: String },

    #[error("Subproject '{name}' not found at: {path}")]
    #[diagnostic(
        code(devstack::project::subproject_missing),
        help(
            "The application root must contain sibling 'backend' and 'frontend' directories, each with a package.json"
        )
    )]
    SubprojectMissing { name: String, path: String },

    #[error("Backend server entry point not found: {path}")]
    #[diagnostic(
        code(devstack::project::server_entry_missing),
        help("Set \"main\" in backend/package.json or pass --entry with the server file")
    )]
    ServerEntryMissing { path: String },

    // Manifest errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(devstack::manifest::not_found),
        help("Each subproject must have a package.json at its root")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(code(devstack::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(
        code(devstack::manifest::parse_failed),
        help("package.json must be a JSON object")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Script '{script}' not defined in {path}")]
    #[diagnostic(
        code(devstack::manifest::script_missing),
        help(
            "Add the script under \"scripts\" in package.json, or pass --no-deploy to skip deployment"
        )
    )]
    ScriptMissing { script: String, path: String },

    // Package manager errors
    #[error("Unknown package manager: {name}")]
    #[diagnostic(
        code(devstack::pm::unknown),
        help("Supported package managers: npm, pnpm, yarn")
    )]
    UnknownPackageManager { name: String },

    // External process errors
    #[error("Failed to start '{command}' in {dir}: {reason}")]
    #[diagnostic(
        code(devstack::process::spawn_failed),
        help("Check that the command is installed and on PATH")
    )]
    CommandSpawnFailed {
        command: String,
        dir: String,
        reason: String,
    },

    #[error("Command '{command}' failed in {dir}: {reason}")]
    #[diagnostic(code(devstack::process::failed))]
    CommandFailed {
        command: String,
        dir: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(devstack::io::error))]
    IoError { message: String },
}

/// Result type alias for devstack operations
pub type Result<T> = std::result::Result<T, DevstackError>;

impl From<std::io::Error> for DevstackError {
    fn from(err: std::io::Error) -> Self {
        DevstackError::IoError {
            message: err.to_string(),
        }
    }
}
