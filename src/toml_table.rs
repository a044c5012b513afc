//! TOML config files: a flat root table of scalar values.
//!
//! Treated like YAML: each root key becomes a [`KeyedCell`], tables and
//! arrays are recorded as [`ScalarCell::NotScalar`]. Integer and float
//! literals are taken as written (`0x1F`, `1_000`), other scalars use their
//! decoded text.

use std::path::Path;

use toml::{Table, Value};

use crate::error::FlagError;
use crate::source;
use crate::types::{KeyedCell, ScalarCell};

/// Decode TOML config content into keyed cells, in document order.
pub fn parse_toml(content: &str, path: &Path) -> Result<Vec<KeyedCell>, FlagError> {
    let table: Table = toml::from_str(content).map_err(|e| FlagError::TomlError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let cells = table
        .into_iter()
        .map(|(key, value)| {
            let site = source::locate_key(content, &key, '=');
            let line = site
                .map(|s| s.line)
                .or_else(|| source::locate_header(content, &key));
            let literal = site.and_then(|s| source::plain_literal(s.rest));
            let cell = match value {
                Value::String(s) => ScalarCell::Scalar(s),
                Value::Integer(i) => ScalarCell::Scalar(literal.map_or_else(|| i.to_string(), String::from)),
                Value::Float(f) => ScalarCell::Scalar(literal.map_or_else(|| f.to_string(), String::from)),
                Value::Boolean(b) => ScalarCell::Scalar(b.to_string()),
                Value::Datetime(d) => ScalarCell::Scalar(d.to_string()),
                Value::Array(_) => ScalarCell::NotScalar("array"),
                Value::Table(_) => ScalarCell::NotScalar("table"),
            };
            KeyedCell { key, cell, line }
        })
        .collect();
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<KeyedCell> {
        parse_toml(content, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn scalars_as_text() {
        let cells = parse("string = \"hello\"\nint = 22\nbool = true\nfloat64 = 1.5\n");
        let texts: Vec<(&str, &ScalarCell)> =
            cells.iter().map(|c| (c.key.as_str(), &c.cell)).collect();
        assert_eq!(
            texts,
            vec![
                ("string", &ScalarCell::Scalar("hello".into())),
                ("int", &ScalarCell::Scalar("22".into())),
                ("bool", &ScalarCell::Scalar("true".into())),
                ("float64", &ScalarCell::Scalar("1.5".into())),
            ]
        );
    }

    #[test]
    fn integer_literal_kept_as_written() {
        let cells = parse("mask = 0xFF # bits\n");
        assert_eq!(cells[0].cell, ScalarCell::Scalar("0xFF".into()));
        assert_eq!(cells[0].line, Some(1));
    }

    #[test]
    fn tables_and_arrays_rejected_with_line() {
        let cells = parse("port = 1\nhosts = [\"a\", \"b\"]\n\n[server]\nhost = \"x\"\n");
        let hosts = cells.iter().find(|c| c.key == "hosts").unwrap();
        assert_eq!(hosts.cell, ScalarCell::NotScalar("array"));
        assert_eq!(hosts.line, Some(2));
        let server = cells.iter().find(|c| c.key == "server").unwrap();
        assert_eq!(server.cell, ScalarCell::NotScalar("table"));
        assert_eq!(server.line, Some(4));
    }

    #[test]
    fn dotted_root_key_has_no_line() {
        let cells = parse("a.b = 1\n");
        assert_eq!(cells[0].key, "a");
        assert_eq!(cells[0].cell, ScalarCell::NotScalar("table"));
        assert_eq!(cells[0].line, None);
    }

    #[test]
    fn comment_after_tab_stripped() {
        let cells = parse("int = 12\t# count\n");
        assert_eq!(cells[0].cell, ScalarCell::Scalar("12".into()));
    }

    #[test]
    fn empty_document() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn syntax_error_wrapped() {
        let err = parse_toml("port = = 1\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, FlagError::TomlError { .. }));
    }
}
