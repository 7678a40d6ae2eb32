//! Project layout errors

use super::DevstackError;

/// Creates an error for a missing project root directory
pub fn dir_not_found(path: impl Into<String>) -> DevstackError {
    DevstackError::ProjectDirNotFound { path: path.into() }
}

/// Creates an error for a missing backend/frontend subproject
pub fn subproject_missing(name: impl Into<String>, path: impl Into<String>) -> DevstackError {
    DevstackError::SubprojectMissing {
        name: name.into(),
        path: path.into(),
    }
}

/// Creates an error for a backend entry point that does not exist on disk
pub fn server_entry_missing(path: impl Into<String>) -> DevstackError {
    DevstackError::ServerEntryMissing { path: path.into() }
}
