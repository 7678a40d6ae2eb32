//! Package manager selection
//!
//! npm is the default. pnpm and yarn are recognized automatically from their
//! lockfiles in a subproject directory, and any of the three can be forced
//! with `--package-manager`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::DevstackError;

/// Supported npm-compatible package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Detect the package manager for a subproject from its lockfile
    ///
    /// Detection order matters: a pnpm lockfile wins over a yarn lockfile
    /// so that migrated projects keep using the newer manager.
    pub fn detect(dir: &Path) -> Self {
        if dir.join("pnpm-lock.yaml").is_file() {
            Self::Pnpm
        } else if dir.join("yarn.lock").is_file() {
            Self::Yarn
        } else {
            Self::Npm
        }
    }

    /// Executable name
    pub fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }

    /// Arguments for installing dependencies
    pub fn install_args(self) -> &'static [&'static str] {
        &["install"]
    }

    /// Arguments for running a manifest script
    pub fn run_args(self, script: &str) -> Vec<String> {
        vec!["run".to_string(), script.to_string()]
    }
}

impl FromStr for PackageManager {
    type Err = DevstackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            _ => Err(DevstackError::UnknownPackageManager {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
