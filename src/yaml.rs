//! YAML config files: a root mapping of scalar values.
//!
//! Every value reaches the flag as text. Strings (plain, quoted or block
//! literal) are used as decoded; numbers, booleans and nulls are taken as
//! written in the source, so the flag's own setter decides what `0x23` or
//! `yes` means. Mappings and sequences are recorded per key as
//! [`ScalarCell::NotScalar`] rather than failing the whole decode, so the
//! resolver can report the offending key with its line.

use std::path::Path;

use serde_yaml::Value;

use crate::error::FlagError;
use crate::source;
use crate::types::{KeyedCell, ScalarCell};

/// Decode YAML config content into keyed cells, in document order.
///
/// An empty (or comment-only) document yields no cells. A root that is not a
/// mapping is an error.
pub fn parse_yaml(content: &str, path: &Path) -> Result<Vec<KeyedCell>, FlagError> {
    if content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    }) {
        return Ok(Vec::new());
    }

    let root: Value = serde_yaml::from_str(content).map_err(|e| FlagError::YamlError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mapping = match root {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(FlagError::InvalidDocument {
                path: path.to_path_buf(),
                reason: format!("expected a mapping at the document root, found {}", kind(&other)),
            });
        }
    };

    let mut cells = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let Some(key) = scalar_key(&key) else {
            return Err(FlagError::InvalidDocument {
                path: path.to_path_buf(),
                reason: format!("keys must be scalars, found {}", kind(&key)),
            });
        };
        let site = source::locate_key(content, &key, ':');
        let cell = to_cell(value, site.and_then(|s| source::plain_literal(s.rest)));
        cells.push(KeyedCell {
            line: site.map(|s| s.line),
            key,
            cell,
        });
    }
    Ok(cells)
}

fn to_cell(value: Value, literal: Option<&str>) -> ScalarCell {
    match value {
        Value::String(s) => ScalarCell::Scalar(s),
        Value::Mapping(_) => ScalarCell::NotScalar("mapping"),
        Value::Sequence(_) => ScalarCell::NotScalar("sequence"),
        Value::Tagged(tagged) => to_cell(tagged.value, None),
        Value::Number(n) => ScalarCell::Scalar(literal.map_or_else(|| n.to_string(), String::from)),
        Value::Bool(b) => ScalarCell::Scalar(literal.map_or_else(|| b.to_string(), String::from)),
        Value::Null => ScalarCell::Scalar(literal.unwrap_or_default().to_string()),
    }
}

fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
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
