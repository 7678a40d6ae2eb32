//! External process errors

use super::DevstackError;

/// Creates an error for a command that could not be started
pub fn spawn_failed(
    command: impl Into<String>,
    dir: impl Into<String>,
    reason: impl Into<String>,
) -> DevstackError {
    DevstackError::CommandSpawnFailed {
        command: command.into(),
        dir: dir.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a command that ran but did not succeed
pub fn failed(
    command: impl Into<String>,
    dir: impl Into<String>,
    reason: impl Into<String>,
) -> DevstackError {
    DevstackError::CommandFailed {
        command: command.into(),
        dir: dir.into(),
        reason: reason.into(),
    }
}
