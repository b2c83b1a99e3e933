//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - expand: Expand command arguments
//! - generate: Generate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod expand;
pub mod generate;

pub use completions::CompletionsArgs;
pub use expand::ExpandArgs;
pub use generate::GenerateArgs;

/// unitgen - per-unit YAML configuration generator
///
/// Expand a YAML template once per unit and merge the results into one document.
#[derive(Parser, Debug)]
#[command(
    name = "unitgen",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Expand a YAML template across a table of named units",
    long_about = "unitgen substitutes the NAME, HOSTNAME and HANAME placeholders of a YAML \
                  template once per unit (e.g. one heat pump per room) and merges the \
                  resulting documents into a single configuration.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  unitgen expand sensors.yaml              \x1b[90m# Print merged YAML\x1b[0m\n   \
                  unitgen expand sensors.yaml -o out.yaml  \x1b[90m# Write merged YAML to a file\x1b[0m\n   \
                  unitgen generate                         \x1b[90m# config_template.yaml -> config.yaml\x1b[0m\n   \
                  unitgen --units rooms.yaml units         \x1b[90m# Show a custom unit table\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory relative paths are resolved against (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "UNITGEN_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// YAML file with the unit table (defaults to the built-in five units)
    #[arg(long, short = 'u', global = true, env = "UNITGEN_UNITS")]
    pub units: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand a template with NAME, HOSTNAME and HANAME and print the merged YAML
    Expand(ExpandArgs),

    /// Expand config_template.yaml into config.yaml with NAME and HOSTNAME
    Generate(GenerateArgs),

    /// Show the active unit table
    Units,

    /// Show version, placeholder sets and built-in unit count
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_expand() {
        let cli = Cli::try_parse_from(["unitgen", "expand", "sensors.yaml"]).unwrap();
        match cli.command {
            Commands::Expand(args) => {
                assert_eq!(args.template, PathBuf::from("sensors.yaml"));
                assert_eq!(args.output, None);
            }
            _ => panic!("Expected Expand command"),
        }
    }

    #[test]
    fn test_cli_parsing_expand_requires_template() {
        assert!(Cli::try_parse_from(["unitgen", "expand"]).is_err());
    }

    #[test]
    fn test_cli_parsing_expand_with_output() {
        let cli =
            Cli::try_parse_from(["unitgen", "expand", "sensors.yaml", "-o", "out.yaml"]).unwrap();
        match cli.command {
            Commands::Expand(args) => {
                assert_eq!(args.output, Some(PathBuf::from("out.yaml")));
            }
            _ => panic!("Expected Expand command"),
        }
    }

    #[test]
    fn test_cli_parsing_generate_defaults() {
        let cli = Cli::try_parse_from(["unitgen", "generate"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.template, PathBuf::from("config_template.yaml"));
                assert_eq!(args.output, PathBuf::from("config.yaml"));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_parsing_units() {
        let cli = Cli::try_parse_from(["unitgen", "units"]).unwrap();
        assert!(matches!(cli.command, Commands::Units));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["unitgen", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "unitgen",
            "-v",
            "-w",
            "/tmp/workspace",
            "-u",
            "rooms.yaml",
            "units",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/workspace")));
        assert_eq!(cli.units, Some(PathBuf::from("rooms.yaml")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["unitgen", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
