//! Expand command implementation
//!
//! Expands a template with NAME, HOSTNAME and HANAME for every unit and
//! prints the merged document, or writes it with `--output`.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::cli::ExpandArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::expander;
use crate::output;
use crate::template::PlaceholderSet;

/// Run expand command
pub fn run(workspace: Option<PathBuf>, units: Option<PathBuf>, args: ExpandArgs) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(workspace)?;
    let table = helpers::load_units(&workspace, units.as_deref())?;
    let placeholders = PlaceholderSet::standard();

    let template_path = output::resolve(&workspace, &args.template);
    let template = output::read_template(&template_path)?;
    debug!(
        template = %template_path.display(),
        tokens = %placeholders.describe(),
        "expanding template"
    );

    let merged = expander::expand_and_merge(&template, &table, &placeholders)?;
    let yaml = output::to_yaml(&merged.into_value())?;

    match args.output {
        Some(path) => output::write_document(&output::resolve(&workspace, &path), &yaml),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(yaml.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
