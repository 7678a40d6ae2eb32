use clap::Parser;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Deploy the frontend, then run the backend server:\n    devstack run\n\n\
                   Run the backend server without deploying:\n    devstack run --no-deploy\n\n\
                   Override the backend entry point:\n    devstack run --entry app.js")]
pub struct RunArgs {
    /// Skip the frontend deploy step
    #[arg(long = "no-deploy")]
    pub no_deploy: bool,

    /// Backend entry point file (defaults to "main" from backend/package.json, then server.js)
    #[arg(long, value_name = "FILE")]
    pub entry: Option<String>,

    /// Package manager for the deploy script (npm, pnpm, yarn). Detected from lockfiles when omitted
    #[arg(long = "package-manager", short = 'p', value_name = "NAME")]
    pub package_manager: Option<String>,
}
