//! Unit table (units.yaml) data structures
//!
//! A unit is one configurable entity, such as a room, identified by a short
//! host-like id and a human-readable display name. The table order decides
//! the order in which per-unit documents are merged.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Built-in unit table used when no units file is given
const DEFAULT_UNITS: &[(&str, &str)] = &[
    ("hp_basement", "Basement"),
    ("hp_office", "Office"),
    ("hp_bedroom", "Bedroom"),
    ("hp_kitchen", "Kitchen"),
    ("hp_livingroom", "Living Room"),
];

/// A single unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Short identifier, substituted for `HOSTNAME`
    pub id: String,

    /// Display name, substituted for `NAME`
    pub name: String,
}

impl Unit {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Lowercase, underscore-separated form of the display name
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Derive a slug from a display name: spaces become underscores, then lowercase
pub fn slugify(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

/// Ordered, non-empty table of units with unique ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTable {
    units: Vec<Unit>,
}

impl Default for UnitTable {
    fn default() -> Self {
        Self {
            units: DEFAULT_UNITS
                .iter()
                .map(|(id, name)| Unit::new(*id, *name))
                .collect(),
        }
    }
}

impl UnitTable {
    /// Build a table, rejecting empty tables and duplicate ids
    pub fn new(units: Vec<Unit>) -> Result<Self> {
        let table = Self { units };
        table.validate()?;
        Ok(table)
    }

    /// Parse a unit table from YAML string
    pub fn from_yaml(yaml: &str, path: &str) -> Result<Self> {
        let table: Self =
            serde_yaml::from_str(yaml).map_err(|e| error::units::parse_failed(path, e.to_string()))?;
        Self::new(table.units)
    }

    /// Load a unit table from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| error::fs::from_read(path, &e))?;
        Self::from_yaml(&content, &path.display().to_string())
    }

    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(error::units::invalid("the table has no units"));
        }

        let mut seen = HashSet::new();
        for unit in &self.units {
            if unit.id.is_empty() {
                return Err(error::units::invalid(format!(
                    "unit '{}' has an empty id",
                    unit.name
                )));
            }
            if !seen.insert(unit.id.as_str()) {
                return Err(error::units::invalid(format!(
                    "duplicate unit id '{}'",
                    unit.id
                )));
            }
        }

        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<'a> IntoIterator for &'a UnitTable {
    type Item = &'a Unit;
    type IntoIter = std::slice::Iter<'a, Unit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
