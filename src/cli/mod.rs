//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - setup: Setup command arguments
//! - run: Run command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod run;
pub mod setup;

pub use completions::CompletionsArgs;
pub use run::RunArgs;
pub use setup::SetupArgs;

/// devstack - two-tier web application runner
///
/// Install dependencies for and run a backend/frontend npm application pair.
#[derive(Parser, Debug)]
#[command(
    name = "devstack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Setup and run a two-tier npm web application",
    long_about = "devstack prepares and runs a web application made of two sibling npm packages, \
                  backend/ and frontend/. 'setup' installs dependencies for both; 'run' deploys \
                  the frontend and keeps the backend server attached to your terminal.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  devstack setup                       \x1b[90m# Install backend and frontend dependencies\x1b[0m\n   \
                  devstack run                         \x1b[90m# Deploy frontend, then run the backend server\x1b[0m\n   \
                  devstack run --no-deploy             \x1b[90m# Run the backend server only\x1b[0m\n   \
                  devstack -C ~/apps/shop setup        \x1b[90m# Operate on a project elsewhere\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root directory (defaults to current directory)
    #[arg(long = "project-dir", short = 'C', global = true, env = "DEVSTACK_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Echo external commands before running them
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install dependencies for the backend and frontend
    Setup(SetupArgs),

    /// Deploy the frontend and run the backend server
    Run(RunArgs),

    /// Show version and build info
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
