use clap::Parser;

/// Arguments for the setup command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install dependencies for both subprojects:\n    devstack setup\n\n\
                   Force a package manager instead of lockfile detection:\n    devstack setup --package-manager pnpm")]
pub struct SetupArgs {
    /// Package manager to use (npm, pnpm, yarn). Detected from lockfiles when omitted
    #[arg(long = "package-manager", short = 'p', value_name = "NAME")]
    pub package_manager: Option<String>,
}
