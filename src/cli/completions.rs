use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    devstack completions bash > ~/.bash_completion.d/devstack\n\n\
                  Generate zsh completions:\n    devstack completions zsh > ~/.zfunc/_devstack\n\n\
                  Generate fish completions:\n    devstack completions fish > ~/.config/fish/completions/devstack.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
