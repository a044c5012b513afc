use std::collections::HashMap;

/// Snapshot of environment variables for one resolution pass.
///
/// Built once and never mutated, so every flag in a pass sees the same
/// environment. Takes iterators so tests can pass synthetic data instead of
/// the real process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvTable {
    vars: HashMap<String, String>,
}

impl EnvTable {
    /// Build from raw `KEY=VALUE` entries, splitting at the first `=`.
    ///
    /// Entries with no `=`, or with `=` as the first character (empty key),
    /// are dropped. A later entry for the same key replaces an earlier one.
    pub fn from_environ<I, S>(environ: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vars = environ
            .into_iter()
            .filter_map(|entry| {
                let entry = entry.as_ref();
                match entry.find('=') {
                    Some(i) if i >= 1 => Some((entry[..i].to_string(), entry[i + 1..].to_string())),
                    _ => None,
                }
            })
            .collect();
        Self { vars }
    }

    /// Build from already-split `(key, value)` pairs. Empty keys are dropped.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let vars = vars.into_iter().filter(|(k, _)| !k.is_empty()).collect();
        Self { vars }
    }

    /// Capture the current process environment. Variables whose key or value
    /// is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(k, v)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_equals() {
        let env = EnvTable::from_environ(["URL=postgres://u:p@h/db?x=1"]);
        assert_eq!(env.get("URL"), Some("postgres://u:p@h/db?x=1"));
    }

    #[test]
    fn empty_value_kept() {
        let env = EnvTable::from_environ(["BOOL="]);
        assert!(env.contains("BOOL"));
        assert_eq!(env.get("BOOL"), Some(""));
    }

    #[test]
    fn malformed_entries_dropped() {
        let env = EnvTable::from_environ(["=C:=C:\\", "NOEQUALS", "", "OK=1"]);
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("OK"), Some("1"));
    }

    #[test]
    fn later_duplicate_wins() {
        let env = EnvTable::from_environ(["A=1", "A=2"]);
        assert_eq!(env.get("A"), Some("2"));
    }

    #[test]
    fn from_vars_drops_empty_keys() {
        let env = EnvTable::from_vars(vec![
            (String::new(), "x".to_string()),
            ("HOST".to_string(), "0.0.0.0".to_string()),
        ]);
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("HOST"), Some("0.0.0.0"));
    }

    #[test]
    fn empty_input_empty_table() {
        let env = EnvTable::from_environ(Vec::<String>::new());
        assert!(env.is_empty());
    }
}
