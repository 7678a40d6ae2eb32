//! devstack - two-tier web application runner
//!
//! A command line tool that prepares and runs a web application made of two
//! sibling npm packages, backend/ and frontend/: 'setup' installs both sets
//! of dependencies, 'run' deploys the frontend and keeps the backend server
//! attached to the terminal.

use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;
mod error;
mod process;
mod progress;
mod project;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::Result;
use project::Project;

/// Check that the project layout exists before dispatching a command
fn check_project_layout(project_dir: Option<PathBuf>) -> Result<()> {
    Project::locate(project_dir)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Pre-flight the project layout for commands that operate on it
    // Version and completions can be run anywhere
    let needs_project = matches!(cli.command, Commands::Setup(_) | Commands::Run(_));

    if needs_project {
        if let Err(e) = check_project_layout(cli.project_dir.clone()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(cli.project_dir, cli.verbose, args),
        Commands::Run(args) => commands::run::run(cli.project_dir, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
