//! Run command implementation
//!
//! Brings the application up:
//! 1. Validate the project layout and load both manifests
//! 2. Run the frontend's deploy script synchronously (unless --no-deploy)
//! 3. Spawn the backend server as a child process
//! 4. Block on the child and exit with its status
//!
//! The command stays attached to the server for its whole lifetime. There is
//! no polling loop; the wait is a blocking `Child::wait`, so devstack uses no
//! CPU while the server runs.

use std::path::PathBuf;
use std::str::FromStr;

use console::Style;

use crate::cli::RunArgs;
use crate::error::{Result, manifest, project as project_err};
use crate::process;
use crate::project::{Manifest, PackageManager, Project};

/// Script the frontend must define for the deploy step
pub const DEPLOY_SCRIPT: &str = "deploy";

/// Program used to launch the backend entry point
pub const SERVER_PROGRAM: &str = "node";

/// Run the run command
pub fn run(project_dir: Option<PathBuf>, verbose: bool, args: RunArgs) -> Result<()> {
    let project = Project::locate(project_dir)?;
    let backend_dir = project.backend_dir();
    let frontend_dir = project.frontend_dir();

    let backend_manifest = Manifest::load(&backend_dir)?;
    let frontend_manifest = Manifest::load(&frontend_dir)?;

    if !args.no_deploy {
        deploy_frontend(&project, &frontend_manifest, args.package_manager.as_deref(), verbose)?;
    }

    // Entry point resolution: flag, then manifest "main", then server.js
    let entry = args
        .entry
        .clone()
        .unwrap_or_else(|| backend_manifest.server_entry().to_string());
    let entry_path = backend_dir.join(&entry);
    if !entry_path.is_file() {
        return Err(project_err::server_entry_missing(
            entry_path.display().to_string(),
        ));
    }

    println!(
        "{} Starting backend server ({})...",
        Style::new().bold().cyan().apply_to("→"),
        backend_manifest.display_name()
    );

    let mut child = process::spawn(SERVER_PROGRAM, &[entry.as_str()], &backend_dir, verbose)?;
    if verbose {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to(format!("backend server pid {}", child.id()))
        );
    }

    let status = child.wait()?;
    if !status.success() {
        // Surface the server's own exit code to the shell
        std::process::exit(status.code().unwrap_or(1));
    }

    println!(
        "{} Backend server exited.",
        Style::new().bold().green().apply_to("✓")
    );

    Ok(())
}

fn deploy_frontend(
    project: &Project,
    frontend_manifest: &Manifest,
    forced_pm: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let frontend_dir = project.frontend_dir();

    if !frontend_manifest.has_script(DEPLOY_SCRIPT) {
        return Err(manifest::script_missing(
            DEPLOY_SCRIPT,
            frontend_dir.join("package.json").display().to_string(),
        ));
    }

    let pm = match forced_pm {
        Some(name) => PackageManager::from_str(name)?,
        None => PackageManager::detect(&frontend_dir),
    };

    println!(
        "{} Deploying frontend ({})...",
        Style::new().bold().cyan().apply_to("→"),
        frontend_manifest.display_name()
    );

    let run_args = pm.run_args(DEPLOY_SCRIPT);
    let run_args: Vec<&str> = run_args.iter().map(String::as_str).collect();
    process::run_streamed(pm.program(), &run_args, &frontend_dir, verbose)?;

    println!(
        "{} Frontend deployed.",
        Style::new().bold().green().apply_to("✓")
    );

    Ok(())
}
