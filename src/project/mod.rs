//! Project layout: the application root and its two subprojects
//!
//! A devstack project is a directory containing two sibling npm packages,
//! `backend/` and `frontend/`, each with its own `package.json`. This module
//! locates the root and hands out the subproject paths; submodules cover:
//! - [`detection`]: Layout validation
//! - [`manifest`]: package.json parsing
//! - [`package_manager`]: npm/pnpm/yarn selection

pub mod detection;
pub mod manifest;
pub mod package_manager;

pub use manifest::Manifest;
pub use package_manager::PackageManager;

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::error::{Result, project};

/// Directory name of the backend subproject
pub const BACKEND_DIR: &str = "backend";

/// Directory name of the frontend subproject
pub const FRONTEND_DIR: &str = "frontend";

/// A validated project root with its two subprojects
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Locate and validate a project
    ///
    /// Uses `dir` when given, otherwise the current working directory.
    /// The path is normalized so later display output doesn't show `./..`
    /// chains. Fails if the root or either subproject layout is missing.
    pub fn locate(dir: Option<PathBuf>) -> Result<Self> {
        let root = match dir {
            Some(d) => d,
            None => std::env::current_dir()?,
        };

        if !root.is_dir() {
            return Err(project::dir_not_found(root.display().to_string()));
        }

        let root = root
            .normalize()
            .map(|np| np.into_path_buf())
            .unwrap_or(root);

        detection::validate(&root)?;

        Ok(Self { root })
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the backend subproject
    pub fn backend_dir(&self) -> PathBuf {
        self.root.join(BACKEND_DIR)
    }

    /// Path to the frontend subproject
    pub fn frontend_dir(&self) -> PathBuf {
        self.root.join(FRONTEND_DIR)
    }
}
