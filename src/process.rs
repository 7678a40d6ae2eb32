//! External process invocation
//!
//! Every external command runs with the target subproject as its working
//! directory; devstack never changes its own working directory. Failures are
//! never swallowed: a spawn error or a non-zero exit status becomes a
//! diagnostic carrying the command line and the directory it ran in.

use std::path::Path;
use std::process::{Child, Command, Output};

use console::Style;

use crate::error::{Result, process};

/// Render a command line for display and error messages
pub fn render(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Run a command to completion with inherited stdio
///
/// The child's output goes straight to the user's terminal. Returns an error
/// if the command cannot be started or exits non-zero.
pub fn run_streamed(program: &str, args: &[&str], dir: &Path, verbose: bool) -> Result<()> {
    let command_line = render(program, args);
    echo(&command_line, dir, verbose);

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| process::spawn_failed(command_line.as_str(), dir.display().to_string(), e.to_string()))?;

    if !status.success() {
        return Err(process::failed(
            command_line.as_str(),
            dir.display().to_string(),
            exit_reason(status.code()),
        ));
    }

    Ok(())
}

/// Run a command to completion with captured output
///
/// Keeps the terminal quiet on success; on failure the tail of the child's
/// stderr is folded into the error so the cause is still visible.
pub fn run_captured(program: &str, args: &[&str], dir: &Path, verbose: bool) -> Result<()> {
    let command_line = render(program, args);
    echo(&command_line, dir, verbose);

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| process::spawn_failed(command_line.as_str(), dir.display().to_string(), e.to_string()))?;

    if !output.status.success() {
        return Err(process::failed(
            command_line.as_str(),
            dir.display().to_string(),
            captured_reason(&output),
        ));
    }

    Ok(())
}

/// Start a long-running command with inherited stdio and return the child
pub fn spawn(program: &str, args: &[&str], dir: &Path, verbose: bool) -> Result<Child> {
    let command_line = render(program, args);
    echo(&command_line, dir, verbose);

    Command::new(program)
        .args(args)
        .current_dir(dir)
        .spawn()
        .map_err(|e| process::spawn_failed(command_line.as_str(), dir.display().to_string(), e.to_string()))
}

fn echo(command_line: &str, dir: &Path, verbose: bool) {
    if verbose {
        let dim = Style::new().dim();
        println!(
            "{} {}",
            dim.apply_to("$"),
            dim.apply_to(format!("{} (in {})", command_line, dir.display()))
        );
    }
}

fn exit_reason(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn captured_reason(output: &Output) -> String {
    let base = exit_reason(output.status.code());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let tail: Vec<&str> = stderr
        .lines()
        .rev()
        .take(8)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    if tail.is_empty() {
        base
    } else {
        format!("{}\n{}", base, tail.join("\n"))
    }
}
