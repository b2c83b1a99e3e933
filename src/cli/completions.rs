use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    unitgen completions bash > ~/.bash_completion.d/unitgen\n\n\
                  Generate zsh completions:\n    unitgen completions zsh > ~/.zfunc/_unitgen\n\n\
                  Generate fish completions:\n    unitgen completions fish > ~/.config/fish/completions/unitgen.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
