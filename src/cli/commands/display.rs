//! Shared display helpers for property maps and assignments.
//!
//! These helpers are used by `track`, `update`, `back`, `forward` and
//! `show` so property values render the same way everywhere.

use std::io::{self, Write};

use serde_json::{Map, Value};

use crate::error::{Result, StateError};

/// Parse `name=value` pairs.
///
/// Values are read as JSON when possible (`3`, `true`, `[1,2]`,
/// `"quoted"`), otherwise kept as plain text.
pub fn parse_assignments(raw: &[String]) -> Result<Map<String, Value>> {
    let mut properties = Map::new();
    for assignment in raw {
        let (name, value) =
            assignment
                .split_once('=')
                .ok_or_else(|| StateError::InvalidArgument {
                    message: format!("expected NAME=VALUE, got '{}'", assignment),
                })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(StateError::InvalidArgument {
                message: format!("missing property name in '{}'", assignment),
            });
        }
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.into()));
        properties.insert(name.to_string(), value);
    }
    Ok(properties)
}

/// Print one `name = value` line per property, indented.
pub fn write_properties(out: &mut dyn Write, properties: &Map<String, Value>) -> io::Result<()> {
    if properties.is_empty() {
        return writeln!(out, "  (no tracked properties)");
    }
    for (name, value) in properties {
        writeln!(out, "  {} = {}", name, value)?;
    }
    Ok(())
}
