//! Version command implementation
//!
//! Besides the crate version this reports which placeholders each
//! subcommand recognises and the size of the built-in unit table.

use crate::error::Result;
use crate::template::PlaceholderSet;
use crate::units::UnitTable;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut out = format!("unitgen {}\n\n", env!("CARGO_PKG_VERSION"));
    out.push_str("Placeholders:\n");
    out.push_str(&format!("  expand:   {}\n", PlaceholderSet::standard().describe()));
    out.push_str(&format!("  generate: {}\n", PlaceholderSet::basic().describe()));
    out.push_str(&format!("\nBuilt-in units: {}\n", UnitTable::default().len()));
    out.push_str(&format!("Minimum Rust: {}\n", env!("CARGO_PKG_RUST_VERSION")));
    out
}
