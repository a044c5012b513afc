//! Config file paths and loading.
//!
//! The config flag holds one or more paths joined with the platform path
//! separator (`:` on Unix, `;` on Windows), e.g.
//! `--config ./local.yml:/etc/app/app.conf`. Files are applied in that order
//! and every flag is written at most once, so earlier files take precedence
//! over later ones.
//!
//! Unlike search-path discovery, a listed file is a requirement: a missing
//! file is an error, not a silent skip.

use std::path::{Path, PathBuf};

use crate::error::FlagError;

/// Split a config flag value into paths. Empty segments are dropped, so an
/// empty value means "no config file".
pub fn split_config_paths(list: &str) -> Vec<PathBuf> {
    if list.is_empty() {
        return Vec::new();
    }
    std::env::split_paths(list)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Read a config file, wrapping any I/O error with the path.
pub fn read_config(path: &Path) -> Result<String, FlagError> {
    std::fs::read_to_string(path).map_err(|e| FlagError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}
