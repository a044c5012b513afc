//! Line-oriented `key=value` config files.
//!
//! ```text
//! # comment
//! int=22
//! string hello
//! APP_LAST_NAME: foo
//! verbose
//! ```
//!
//! The first `=`, space or `:` on a line separates name from value; both are
//! trimmed. A line with no delimiter is a bare name (boolean true). Blank
//! lines, `#` comments and a `---` line are skipped. There is no escaping and
//! no multi-line value.

use crate::types::ConfigEntry;

/// Parse plain-text config content into entries, in file order.
///
/// Name mapping and flag lookup happen later in the resolver; this only
/// splits lines.
pub fn parse_plain(content: &str) -> Vec<ConfigEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(line, i + 1))
        .collect()
}

fn parse_line(line: &str, line_no: usize) -> Option<ConfigEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line == "---" {
        return None;
    }

    let entry = match line.find(['=', ' ', ':']) {
        Some(i) => ConfigEntry {
            name: line[..i].trim().to_string(),
            value: Some(line[i + 1..].trim().to_string()),
            line: line_no,
        },
        None => ConfigEntry {
            name: line.to_string(),
            value: None,
            line: line_no,
        },
    };
    Some(entry)
}
