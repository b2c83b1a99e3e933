//! Units command implementation
//!
//! Prints the active unit table with the values each placeholder takes.

use std::path::PathBuf;

use console::Style;

use crate::commands::helpers;
use crate::error::Result;
use crate::units::UnitTable;

/// Run units command
pub fn run(workspace: Option<PathBuf>, units: Option<PathBuf>) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(workspace)?;
    let table = helpers::load_units(&workspace, units.as_deref())?;
    display_units(&table);
    Ok(())
}

fn display_units(table: &UnitTable) {
    println!("Units ({}):", table.len());
    println!();

    for unit in table {
        println!("  {}", Style::new().bold().yellow().apply_to(&unit.id));
        println!("    {} {}", Style::new().bold().apply_to("NAME:"), unit.name);
        println!("    {} {}", Style::new().bold().apply_to("HANAME:"), unit.slug());
    }
}
