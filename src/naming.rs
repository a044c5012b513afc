//! Mapping between flag names and environment variable keys.
//!
//! With prefix `APP`:
//!
//! | Flag name | Env key |
//! |-----------|---------|
//! | `port` | `APP_PORT` |
//! | `last-name` | `APP_LAST_NAME` |
//! | `db.url` | `APP_DB_URL` |
//!
//! Config files may use either form as a key; [`ReverseKeys`] maps the env
//! form back to the flag name.

use indexmap::IndexMap;

/// Compute the environment key for a flag name.
///
/// Uppercases the name, prepends `{prefix}_` when `prefix` is non-empty, and
/// replaces every `-` and `.` with `_`. The prefix goes through the same
/// replacement.
pub fn to_env_key(name: &str, prefix: &str) -> String {
    let upper = name.to_uppercase();
    let key = if prefix.is_empty() {
        upper
    } else {
        format!("{prefix}_{upper}")
    };
    key.replace(['-', '.'], "_")
}

/// Env key → flag name table for one set of registered flags.
///
/// Built from flag names in declaration order. When two names map to the same
/// key the first declared one keeps it.
#[derive(Debug, Clone, Default)]
pub struct ReverseKeys {
    keys: IndexMap<String, String>,
}

impl ReverseKeys {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>, prefix: &str) -> Self {
        let mut keys = IndexMap::new();
        for name in names {
            keys.entry(to_env_key(name, prefix))
                .or_insert_with(|| name.to_string());
        }
        Self { keys }
    }

    /// Resolve a config file key to a flag name. A key that is some flag's env
    /// key (compared case-sensitively) becomes that flag's name; anything else
    /// is returned unchanged.
    pub fn canonical<'a>(&'a self, key: &'a str) -> &'a str {
        self.keys.get(key).map(String::as_str).unwrap_or(key)
    }
}
