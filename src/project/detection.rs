//! Project layout detection
//!
//! A directory is a devstack project when it contains both subproject
//! directories and each of them carries a `package.json`.

use std::path::Path;

use super::{BACKEND_DIR, FRONTEND_DIR, manifest::MANIFEST_FILE};
use crate::error::{Result, manifest, project};

/// Detect whether a project layout exists at the given path
pub fn exists(root: &Path) -> bool {
    subprojects(root)
        .iter()
        .all(|(_, dir)| dir.is_dir() && dir.join(MANIFEST_FILE).is_file())
}

/// Validate the project layout, reporting the first missing piece
///
/// Checks run in the fixed subproject order (backend before frontend) so
/// error output is deterministic.
pub fn validate(root: &Path) -> Result<()> {
    for (name, dir) in subprojects(root) {
        if !dir.is_dir() {
            return Err(project::subproject_missing(name, dir.display().to_string()));
        }
        let manifest_path = dir.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(manifest::not_found(manifest_path.display().to_string()));
        }
    }
    Ok(())
}

fn subprojects(root: &Path) -> [(&'static str, std::path::PathBuf); 2] {
    [
        (BACKEND_DIR, root.join(BACKEND_DIR)),
        (FRONTEND_DIR, root.join(FRONTEND_DIR)),
    ]
}
