//! Merge accumulators for per-unit documents
//!
//! The first unit's parsed document fixes the shape of the accumulator:
//!
//! - [`Document::Sequence`]: later sequences are appended.
//! - [`Document::Mapping`]: for every key of a later mapping, its value is
//!   appended to the sequence already stored under that key. Values that are
//!   themselves mappings are merged the same way one level down.
//!
//! [`NestedDocument`] is the stricter shape used by `generate`: a single
//! top-level key holding a mapping of sub-keys to sequences.
//!
//! ```text
//! first:  {mqtt: {sensors: [a_temp]}}
//! next:   {mqtt: {sensors: [b_temp]}}
//! result: {mqtt: {sensors: [a_temp, b_temp]}}
//! ```

use serde_yaml::{Mapping, Value};

use crate::error::{self, Result};

const ROOT_PATH: &str = "<root>";

/// Human-readable name of a YAML value's kind
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Render a mapping key for error paths
fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| value_kind(other).to_string()),
    }
}

fn join_path(parent: &str, key: &Value) -> String {
    if parent.is_empty() {
        key_label(key)
    } else {
        format!("{parent}.{}", key_label(key))
    }
}

/// Merged document with its shape fixed by the first unit
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Document {
    /// Start an accumulator from the first unit's document
    pub fn from_value(value: Value, unit: &str) -> Result<Self> {
        match value {
            Value::Sequence(items) => Ok(Document::Sequence(items)),
            Value::Mapping(map) => Ok(Document::Mapping(map)),
            other => Err(error::template::unsupported_document(
                unit,
                format!(
                    "expected a sequence or mapping at the top level, found {}",
                    value_kind(&other)
                ),
            )),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Document::Sequence(_) => "sequence",
            Document::Mapping(_) => "mapping",
        }
    }

    /// Merge a later unit's document into this accumulator
    pub fn merge(&mut self, value: Value, unit: &str) -> Result<()> {
        match (self, value) {
            (Document::Sequence(items), Value::Sequence(more)) => {
                items.extend(more);
                Ok(())
            }
            (Document::Mapping(map), Value::Mapping(incoming)) => {
                merge_mapping(map, incoming, unit, "")
            }
            (acc, other) => Err(error::merge::shape_mismatch(
                unit,
                ROOT_PATH,
                acc.shape(),
                value_kind(&other),
            )),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Document::Sequence(items) => Value::Sequence(items),
            Document::Mapping(map) => Value::Mapping(map),
        }
    }
}

fn merge_mapping(acc: &mut Mapping, incoming: Mapping, unit: &str, parent: &str) -> Result<()> {
    for (key, value) in incoming {
        let path = join_path(parent, &key);
        let Some(existing) = acc.get_mut(&key) else {
            return Err(error::merge::missing_key(unit, path));
        };

        match (existing, value) {
            (Value::Sequence(items), Value::Sequence(more)) => items.extend(more),
            (Value::Mapping(inner), Value::Mapping(more)) => {
                merge_mapping(inner, more, unit, &path)?;
            }
            (existing, value) => {
                return Err(error::merge::shape_mismatch(
                    unit,
                    path,
                    value_kind(existing),
                    value_kind(&value),
                ));
            }
        }
    }

    Ok(())
}

/// Single top-level key over a mapping of sub-keys to sequences
#[derive(Debug, Clone, PartialEq)]
pub struct NestedDocument {
    root: Value,
    sections: Mapping,
}

impl NestedDocument {
    /// Start an accumulator from the first unit's document
    pub fn from_value(value: Value, unit: &str) -> Result<Self> {
        let unsupported = |reason: String| error::template::unsupported_document(unit, reason);

        let top = match value {
            Value::Mapping(top) => top,
            other => {
                return Err(unsupported(format!(
                    "expected a mapping with a single key, found {}",
                    value_kind(&other)
                )));
            }
        };
        let (root, inner) = single_entry(top).map_err(unsupported)?;

        let sections = match inner {
            Value::Mapping(sections) => sections,
            other => {
                return Err(unsupported(format!(
                    "expected '{}' to hold a mapping of lists, found {}",
                    key_label(&root),
                    value_kind(&other)
                )));
            }
        };
        for (key, section) in &sections {
            if !section.is_sequence() {
                return Err(unsupported(format!(
                    "expected '{}' to be a list, found {}",
                    join_path(&key_label(&root), key),
                    value_kind(section)
                )));
            }
        }

        Ok(Self { root, sections })
    }

    /// Merge a later unit's document, concatenating lists per sub-key
    pub fn merge(&mut self, value: Value, unit: &str) -> Result<()> {
        let top = match value {
            Value::Mapping(top) => top,
            other => {
                return Err(error::merge::shape_mismatch(
                    unit,
                    ROOT_PATH,
                    "mapping",
                    value_kind(&other),
                ));
            }
        };
        let (root, inner) =
            single_entry(top).map_err(|reason| error::template::unsupported_document(unit, reason))?;
        if root != self.root {
            return Err(error::merge::missing_key(unit, key_label(&root)));
        }

        let parent = key_label(&self.root);
        let incoming = match inner {
            Value::Mapping(incoming) => incoming,
            other => {
                return Err(error::merge::shape_mismatch(
                    unit,
                    parent,
                    "mapping",
                    value_kind(&other),
                ));
            }
        };

        for (key, section) in incoming {
            let path = join_path(&parent, &key);
            let Some(Value::Sequence(items)) = self.sections.get_mut(&key) else {
                return Err(error::merge::missing_key(unit, path));
            };
            match section {
                Value::Sequence(more) => items.extend(more),
                other => {
                    return Err(error::merge::shape_mismatch(
                        unit,
                        path,
                        "sequence",
                        value_kind(&other),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Reassemble as a plain mapping
    pub fn into_value(self) -> Value {
        let mut top = Mapping::new();
        top.insert(self.root, Value::Mapping(self.sections));
        Value::Mapping(top)
    }
}

fn single_entry(top: Mapping) -> std::result::Result<(Value, Value), String> {
    if top.len() != 1 {
        return Err(format!(
            "expected exactly one top-level key, found {}",
            top.len()
        ));
    }
    top.into_iter()
        .next()
        .ok_or_else(|| "expected exactly one top-level key, found 0".to_string())
}
