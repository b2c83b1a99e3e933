//! Generate command implementation
//!
//! Reads `config_template.yaml`, expands it with NAME and HOSTNAME for every
//! unit, and overwrites `config.yaml`. The output is only written once every
//! unit has merged, so a failing run leaves any existing file untouched.

use std::path::PathBuf;

use console::Style;
use tracing::debug;

use crate::cli::GenerateArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::expander;
use crate::output;
use crate::template::PlaceholderSet;

/// Run generate command
pub fn run(workspace: Option<PathBuf>, units: Option<PathBuf>, args: GenerateArgs) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(workspace)?;
    let table = helpers::load_units(&workspace, units.as_deref())?;
    let placeholders = PlaceholderSet::basic();

    let template_path = output::resolve(&workspace, &args.template);
    let output_path = output::resolve(&workspace, &args.output);
    let template = output::read_template(&template_path)?;
    debug!(template = %template_path.display(), "generating configuration");

    let merged = expander::expand_nested(&template, &table, &placeholders)?;
    let yaml = output::to_yaml(&merged.into_value())?;
    output::write_document(&output_path, &yaml)?;

    println!(
        "{} {} ({} units)",
        Style::new().bold().green().apply_to("Wrote"),
        output_path.display(),
        table.len()
    );

    Ok(())
}
