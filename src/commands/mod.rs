//! Command implementations for devstack CLI

pub mod completions;
pub mod run;
pub mod setup;
pub mod version;
