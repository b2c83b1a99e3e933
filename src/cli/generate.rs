use clap::Parser;
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "The template must hold a single top-level key whose value maps \
                  sub-keys to lists. Lists are concatenated across units and the result \
                  overwrites the output file.\n\n\
                  EXAMPLES:\n  \
                  Generate config.yaml in the current directory:\n    unitgen generate\n\n\
                  Generate in another directory:\n    unitgen -w ./homeassistant generate")]
pub struct GenerateArgs {
    /// Template with NAME and HOSTNAME placeholders
    #[arg(long, short = 't', value_name = "FILE", default_value = "config_template.yaml")]
    pub template: PathBuf,

    /// Output file, overwritten on success
    #[arg(long, short = 'o', value_name = "FILE", default_value = "config.yaml")]
    pub output: PathBuf,
}
