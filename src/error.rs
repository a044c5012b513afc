use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The value source an error refers to. Rendered into messages so users can
/// tell a bad environment variable apart from a bad config file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    CommandLine,
    Environment,
    Configuration,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::CommandLine => f.write_str("flag"),
            Source::Environment => f.write_str("environment variable"),
            Source::Configuration => f.write_str("configuration variable"),
        }
    }
}

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum FlagError {
    /// `help` or `h` showed up where a flag name was expected. Usage has
    /// already been emitted when this is returned.
    #[error("help requested")]
    HelpRequested,

    #[error("{origin} provided but not defined: {name}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(help("register the flag or remove '{name}' from the input"))
    )]
    UnknownName { origin: Source, name: String },

    #[error("invalid value {value:?} for {origin} {name}: {reason}")]
    InvalidValue {
        origin: Source,
        name: String,
        value: String,
        reason: String,
    },

    #[error("invalid boolean value {value:?} for {origin} {name}: {reason}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(help("use one of true/false, yes/no, on/off, 1/0"))
    )]
    InvalidBoolean {
        origin: Source,
        name: String,
        value: String,
        reason: String,
    },

    #[error("invalid value for configuration variable {name} in {path}{}: a {kind} is not a scalar value", line_suffix(.line))]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(help("only strings, numbers and booleans can be assigned to a flag"))
    )]
    NotScalar {
        name: String,
        path: PathBuf,
        line: Option<usize>,
        kind: &'static str,
    },

    #[error("provided {key} but it was empty")]
    EmptyFileReference { key: String },

    #[error("could not read file {path} provided by {key}: {source}")]
    SecretRead {
        key: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    YamlError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    TomlError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    #[cfg(feature = "clap")]
    #[error(transparent)]
    CommandLine(#[from] clap::Error),
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|n| format!(" (line {n})")).unwrap_or_default()
}

impl FlagError {
    /// True when the pass stopped because help was requested rather than
    /// because of a real failure.
    pub fn is_help(&self) -> bool {
        matches!(self, FlagError::HelpRequested)
    }
}
