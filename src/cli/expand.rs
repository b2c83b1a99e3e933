use clap::Parser;
use std::path::PathBuf;

/// Arguments for the expand command
#[derive(Parser, Debug)]
#[command(after_help = "PLACEHOLDERS:\n  \
                  NAME      unit display name (Living Room)\n  \
                  HOSTNAME  unit id (hp_livingroom)\n  \
                  HANAME    display name slug (living_room)\n\n\
                  EXAMPLES:\n  \
                  Print merged YAML:\n    unitgen expand sensors.yaml\n\n\
                  Write merged YAML to a file:\n    unitgen expand sensors.yaml --output sensors.out.yaml\n\n\
                  Use a custom unit table:\n    unitgen --units rooms.yaml expand sensors.yaml")]
pub struct ExpandArgs {
    /// YAML template to use. Allowed keys are NAME, HOSTNAME, HANAME
    pub template: PathBuf,

    /// Write the merged YAML to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
