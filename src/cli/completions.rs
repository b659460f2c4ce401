use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    composer completions bash > ~/.bash_completion.d/composer\n\n\
                  Generate zsh completions:\n    composer completions zsh > ~/.zfunc/_composer\n\n\
                  Generate fish completions:\n    composer completions fish > ~/.config/fish/completions/composer.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
