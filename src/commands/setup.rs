//! Setup command implementation
//!
//! Installs dependencies for each subproject in a fixed order:
//! 1. Validate the project layout
//! 2. Install backend dependencies
//! 3. Install frontend dependencies
//! 4. Print the follow-up instruction
//!
//! The order is deterministic (backend first) so failures always point at
//! the same step. A failed install aborts the command; nothing continues on
//! a broken subproject.

use std::path::PathBuf;
use std::str::FromStr;

use console::Style;

use crate::cli::SetupArgs;
use crate::error::Result;
use crate::process;
use crate::progress::StepDisplay;
use crate::project::{PackageManager, Project};

/// Run setup command
pub fn run(project_dir: Option<PathBuf>, verbose: bool, args: SetupArgs) -> Result<()> {
    let project = Project::locate(project_dir)?;

    let forced = args
        .package_manager
        .as_deref()
        .map(PackageManager::from_str)
        .transpose()?;

    let steps = [
        ("backend", project.backend_dir()),
        ("frontend", project.frontend_dir()),
    ];

    let display = StepDisplay::new(steps.len() as u64);

    for (name, dir) in &steps {
        let pm = forced.unwrap_or_else(|| PackageManager::detect(dir));
        display.update_step(&format!("{} ({} install)", name, pm));

        let result = if verbose {
            // Verbose streams the package manager's own output
            process::run_streamed(pm.program(), pm.install_args(), dir, verbose)
        } else {
            process::run_captured(pm.program(), pm.install_args(), dir, verbose)
        };

        if let Err(e) = result {
            display.abandon();
            return Err(e);
        }

        display.inc_step();
    }

    display.finish("dependencies installed");

    println!(
        "{} Dependencies installed. Run '{}' to start the application.",
        Style::new().bold().green().apply_to("✓"),
        Style::new().bold().apply_to("devstack run")
    );

    Ok(())
}
