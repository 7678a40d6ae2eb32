//! package.json manifest errors

use super::DevstackError;

/// Creates an error for a missing package.json
pub fn not_found(path: impl Into<String>) -> DevstackError {
    DevstackError::ManifestNotFound { path: path.into() }
}

/// Creates an error for an unreadable package.json
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DevstackError {
    DevstackError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for an unparsable package.json
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DevstackError {
    DevstackError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a script missing from the manifest's scripts table
pub fn script_missing(script: impl Into<String>, path: impl Into<String>) -> DevstackError {
    DevstackError::ScriptMissing {
        script: script.into(),
        path: path.into(),
    }
}
