//! Template expansion across a unit table
//!
//! Each unit gets its own copy of the template with placeholders substituted,
//! which is parsed as YAML and merged into one accumulator in table order.
//! The first error aborts the whole expansion; nothing is returned for the
//! units that succeeded before it.

use serde_yaml::Value;
use tracing::debug;

use crate::document::{Document, NestedDocument};
use crate::error::{self, Result};
use crate::template::PlaceholderSet;
use crate::units::{Unit, UnitTable};

/// Substitute and parse the template for one unit
///
/// Merge keys (`<<: *anchor`) are resolved before the document is merged.
fn expand_unit(template: &str, unit: &Unit, placeholders: &PlaceholderSet) -> Result<Value> {
    let text = placeholders.substitute(template, unit);
    debug!(unit = %unit.id, bytes = text.len(), "expanded template");
    let mut value: Value = serde_yaml::from_str(&text)
        .map_err(|e| error::template::parse_failed(&unit.id, e.to_string()))?;
    value
        .apply_merge()
        .map_err(|e| error::template::parse_failed(&unit.id, e.to_string()))?;
    Ok(value)
}

/// Expand `template` for every unit and merge the documents
///
/// The first unit's document decides whether the result is a sequence or a
/// mapping; later documents must have the same shape.
pub fn expand_and_merge(
    template: &str,
    units: &UnitTable,
    placeholders: &PlaceholderSet,
) -> Result<Document> {
    let mut merged: Option<Document> = None;

    for unit in units {
        let value = expand_unit(template, unit, placeholders)?;
        match merged.as_mut() {
            None => {
                let document = Document::from_value(value, &unit.id)?;
                debug!(unit = %unit.id, shape = document.shape(), "started merged document");
                merged = Some(document);
            }
            Some(document) => {
                document.merge(value, &unit.id)?;
                debug!(unit = %unit.id, "merged unit document");
            }
        }
    }

    merged.ok_or_else(|| error::units::invalid("the table has no units"))
}

/// Expand `template` for every unit into a single-key, mapping-of-lists document
pub fn expand_nested(
    template: &str,
    units: &UnitTable,
    placeholders: &PlaceholderSet,
) -> Result<NestedDocument> {
    let mut merged: Option<NestedDocument> = None;

    for unit in units {
        let value = expand_unit(template, unit, placeholders)?;
        match merged.as_mut() {
            None => merged = Some(NestedDocument::from_value(value, &unit.id)?),
            Some(document) => document.merge(value, &unit.id)?,
        }
        debug!(unit = %unit.id, "merged unit document");
    }

    merged.ok_or_else(|| error::units::invalid("the table has no units"))
}
