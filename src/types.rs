use std::path::Path;

/// Flag name that holds the config file path(s) unless overridden.
pub const DEFAULT_CONFIG_FLAG: &str = "config";

/// Knobs for one resolution pass. Owned by the flag set that runs the pass,
/// so two flag sets never share prefix or indirection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Prepended (with `_`) to every computed environment key. Empty means none.
    pub env_prefix: String,
    /// When false the environment stage is skipped entirely.
    pub env_enabled: bool,
    /// Look for `<KEY>_FILE` when `<KEY>` is absent and read the named file.
    pub read_file_indirection: bool,
    /// Strip leading and trailing whitespace from indirected file content.
    pub trim_file_content: bool,
    /// Flag whose value lists the config files to apply. `None` disables the
    /// file stage of [`resolve`](crate::resolve).
    pub config_flag: Option<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            env_prefix: String::new(),
            env_enabled: true,
            read_file_indirection: false,
            trim_file_content: false,
            config_flag: Some(DEFAULT_CONFIG_FLAG.to_string()),
        }
    }
}

/// One directive from a plain-text config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub name: String,
    /// `None` for a bare name with no delimiter, which sets a boolean to true.
    pub value: Option<String>,
    /// 1-indexed source line.
    pub line: usize,
}

impl ConfigEntry {
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

/// Decoded value of one key in a structured (YAML or TOML) config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarCell {
    /// The literal text of a scalar, handed to the flag's setter unchanged.
    Scalar(String),
    /// A composite value. Carries its kind ("mapping", "sequence", "table",
    /// "array") for the error message.
    NotScalar(&'static str),
}

/// A root-level key of a structured config file with its decoded cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedCell {
    pub key: String,
    pub cell: ScalarCell,
    /// 1-indexed line of the key, `None` when it could not be located.
    pub line: Option<usize>,
}

/// Config file syntax, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Plain,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.yaml`/`.yml` → YAML, `.toml` → TOML, anything else → plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => ConfigFormat::Yaml,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Plain,
        }
    }
}
