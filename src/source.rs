//! Best-effort lookup of root-level keys in structured config text.
//!
//! The YAML and TOML decoders do not report where a key was defined, and they
//! normalize numeric literals. Scanning the source text recovers both the
//! line number (for error messages) and the literal as written (so `0x23`
//! reaches the flag setter as `0x23`).

/// A located key: its 1-indexed line and the raw text after the delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySite<'a> {
    pub line: usize,
    pub rest: &'a str,
}

/// Find the first unindented line that assigns `key` with `delimiter`.
///
/// Matches the bare key as well as its single- or double-quoted form. For `:`
/// the delimiter must be followed by whitespace or end of line, so `a:b` is
/// not a YAML assignment of `a`.
pub fn locate_key<'a>(content: &'a str, key: &str, delimiter: char) -> Option<KeySite<'a>> {
    for (i, line) in content.lines().enumerate() {
        if line.starts_with(char::is_whitespace) || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = strip_key(line, key)
            .map(str::trim_start)
            .and_then(|after| after.strip_prefix(delimiter))
            && (delimiter != ':' || rest.is_empty() || rest.starts_with(char::is_whitespace))
        {
            return Some(KeySite {
                line: i + 1,
                rest,
            });
        }
    }
    None
}

/// Find the line of a TOML `[key]` or `[[key]]` header.
pub fn locate_header(content: &str, key: &str) -> Option<usize> {
    content.lines().enumerate().find_map(|(i, line)| {
        let header = line.trim();
        let inner = header
            .strip_prefix("[[")
            .and_then(|h| h.strip_suffix("]]"))
            .or_else(|| header.strip_prefix('[').and_then(|h| h.strip_suffix(']')))?;
        (inner.trim() == key).then_some(i + 1)
    })
}

/// Extract a plain literal from the text after a delimiter: drop a trailing
/// comment (a `#` preceded by a space or tab) and surrounding whitespace.
///
/// Returns `None` for text that is not a plain literal (quoted, block,
/// anchored, tagged or aliased values), so the caller falls back to the
/// decoder's rendering.
pub fn plain_literal(rest: &str) -> Option<&str> {
    let text = strip_comment(rest).trim();

    if text.starts_with(['"', '\'', '|', '>', '&', '*', '!', '[', '{']) {
        return None;
    }
    Some(text)
}

fn strip_comment(rest: &str) -> &str {
    let mut after_space = false;
    for (i, c) in rest.char_indices() {
        if c == '#' && after_space {
            return &rest[..i];
        }
        after_space = c.is_whitespace();
    }
    rest
}

fn strip_key<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    if let Some(rest) = line.strip_prefix(key) {
        return Some(rest);
    }
    for quote in ['"', '\''] {
        if let Some(rest) = line
            .strip_prefix(quote)
            .and_then(|l| l.strip_prefix(key))
            .and_then(|l| l.strip_prefix(quote))
        {
            return Some(rest);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_key_line_and_rest() {
        let content = "str: hello\nint: 0x23\n";
        let site = locate_key(content, "int", ':').unwrap();
        assert_eq!(site.line, 2);
        assert_eq!(site.rest.trim(), "0x23");
    }

    #[test]
    fn prefix_of_longer_key_not_matched() {
        let content = "string2: world\nstring: hello\n";
        let site = locate_key(content, "string", ':').unwrap();
        assert_eq!(site.line, 2);
    }

    #[test]
    fn nested_keys_ignored() {
        let content = "obj:\n  int: 1\nint: 2\n";
        let site = locate_key(content, "int", ':').unwrap();
        assert_eq!(site.line, 3);
    }

    #[test]
    fn quoted_key_matched() {
        let content = "\"last-name\": foo\n";
        assert_eq!(locate_key(content, "last-name", ':').unwrap().line, 1);
    }

    #[test]
    fn colon_needs_following_space() {
        assert!(locate_key("a:b\n", "a", ':').is_none());
        assert!(locate_key("a:\n", "a", ':').is_some());
    }

    #[test]
    fn toml_equals_delimiter() {
        let content = "# header\nport = 0x1F\n";
        let site = locate_key(content, "port", '=').unwrap();
        assert_eq!(site.line, 2);
        assert_eq!(plain_literal(site.rest), Some("0x1F"));
    }

    #[test]
    fn missing_key_none() {
        assert!(locate_key("a: 1\n", "b", ':').is_none());
    }

    #[test]
    fn header_lines() {
        let content = "port = 1\n[server]\nhost = \"x\"\n[[plugins]]\n";
        assert_eq!(locate_header(content, "server"), Some(2));
        assert_eq!(locate_header(content, "plugins"), Some(4));
        assert_eq!(locate_header(content, "port"), None);
    }

    #[test]
    fn literal_strips_comment() {
        assert_eq!(plain_literal(" 12345 # count"), Some("12345"));
        assert_eq!(plain_literal(""), Some(""));
    }

    #[test]
    fn literal_strips_comment_after_tab() {
        assert_eq!(plain_literal(" 12\t# count"), Some("12"));
        assert_eq!(plain_literal("\t0x1F\t\t#bits"), Some("0x1F"));
    }

    #[test]
    fn hash_inside_literal_kept() {
        assert_eq!(plain_literal(" a#b"), Some("a#b"));
        assert_eq!(plain_literal(" # only a comment"), Some(""));
    }

    #[test]
    fn literal_rejects_non_plain() {
        assert_eq!(plain_literal(" \"1\""), None);
        assert_eq!(plain_literal(" *anchor"), None);
        assert_eq!(plain_literal(" !!int 3"), None);
    }
}
