//! package.json parsing
//!
//! Only the fields devstack acts on are deserialized: the package name for
//! display, `main` for the backend entry point, and `scripts` for the
//! frontend deploy step. Everything else in the manifest is ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, manifest};

/// Manifest file name inside each subproject
pub const MANIFEST_FILE: &str = "package.json";

/// Fallback backend entry point when the manifest has no `main` field
pub const DEFAULT_SERVER_ENTRY: &str = "server.js";

/// Subset of an npm package manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Package name, used for display only
    pub name: Option<String>,

    /// Entry point file, relative to the package directory
    pub main: Option<String>,

    /// Script table (`npm run <name>`)
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

impl Manifest {
    /// Load the manifest from `<dir>/package.json`
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Err(manifest::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| manifest::read_failed(path.display().to_string(), e.to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| manifest::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Server entry point: `main`, or `server.js` when unset
    pub fn server_entry(&self) -> &str {
        self.main.as_deref().unwrap_or(DEFAULT_SERVER_ENTRY)
    }

    /// Whether the script table defines the given script
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    /// Package name for display, or a placeholder when unnamed
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed package)")
    }
}
