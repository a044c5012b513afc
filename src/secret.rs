//! `<KEY>_FILE` indirection for file-mounted secrets (Docker and Kubernetes
//! secrets). Only consulted when `<KEY>` itself is absent.

use std::path::PathBuf;

use tracing::debug;

use crate::env::EnvTable;
use crate::error::FlagError;
use crate::types::ResolveOptions;

/// Resolve `key` through its `_FILE` variant.
///
/// Returns `Ok(None)` when indirection is disabled or `<key>_FILE` is not set.
/// An empty `<key>_FILE` is an error, as is a file that cannot be read.
pub fn resolve_indirect(
    env: &EnvTable,
    key: &str,
    options: &ResolveOptions,
) -> Result<Option<String>, FlagError> {
    if !options.read_file_indirection {
        return Ok(None);
    }

    let file_key = format!("{key}_FILE");
    let Some(path) = env.get(&file_key) else {
        return Ok(None);
    };
    if path.is_empty() {
        return Err(FlagError::EmptyFileReference { key: file_key });
    }

    let path = PathBuf::from(path);
    let content = std::fs::read_to_string(&path).map_err(|e| FlagError::SecretRead {
        key: file_key.clone(),
        path: path.clone(),
        source: e,
    })?;
    debug!(key = %file_key, path = %path.display(), "read value from file");

    if options.trim_file_content {
        Ok(Some(content.trim().to_string()))
    } else {
        Ok(Some(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn enabled(trim: bool) -> ResolveOptions {
        ResolveOptions {
            read_file_indirection: true,
            trim_file_content: trim,
            ..ResolveOptions::default()
        }
    }

    fn env_with(key: &str, value: &str) -> EnvTable {
        EnvTable::from_vars(vec![(key.to_string(), value.to_string())])
    }

    #[test]
    fn disabled_skips_even_when_file_var_present() {
        let dir = TempDir::new().unwrap();
        let secret = dir.path().join("secret.txt");
        fs::write(&secret, "top").unwrap();
        let env = env_with("TOKEN_FILE", secret.to_str().unwrap());

        let value = resolve_indirect(&env, "TOKEN", &ResolveOptions::default()).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn missing_file_var_skips() {
        let value = resolve_indirect(&EnvTable::default(), "TOKEN", &enabled(true)).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn reads_and_trims() {
        let dir = TempDir::new().unwrap();
        let secret = dir.path().join("secret.txt");
        fs::write(&secret, "  top\n").unwrap();
        let env = env_with("YOUR_SECRET_FILE", secret.to_str().unwrap());

        let value = resolve_indirect(&env, "YOUR_SECRET", &enabled(true)).unwrap();
        assert_eq!(value.as_deref(), Some("top"));
    }

    #[test]
    fn trim_keeps_inner_whitespace() {
        let dir = TempDir::new().unwrap();
        let secret = dir.path().join("secret.txt");
        fs::write(&secret, "\ttwo words\n\n").unwrap();
        let env = env_with("PHRASE_FILE", secret.to_str().unwrap());

        let value = resolve_indirect(&env, "PHRASE", &enabled(true)).unwrap();
        assert_eq!(value.as_deref(), Some("two words"));
    }

    #[test]
    fn untrimmed_content_verbatim() {
        let dir = TempDir::new().unwrap();
        let secret = dir.path().join("secret.txt");
        fs::write(&secret, "top\n").unwrap();
        let env = env_with("TOKEN_FILE", secret.to_str().unwrap());

        let value = resolve_indirect(&env, "TOKEN", &enabled(false)).unwrap();
        assert_eq!(value.as_deref(), Some("top\n"));
    }

    #[test]
    fn empty_reference_is_error() {
        let env = env_with("TOKEN_FILE", "");
        let err = resolve_indirect(&env, "TOKEN", &enabled(true)).unwrap_err();
        assert!(matches!(err, FlagError::EmptyFileReference { ref key } if key == "TOKEN_FILE"));
    }

    #[test]
    fn unreadable_file_names_path_and_key() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");
        let env = env_with("TOKEN_FILE", missing.to_str().unwrap());

        let err = resolve_indirect(&env, "TOKEN", &enabled(true)).unwrap_err();
        match err {
            FlagError::SecretRead { key, path, .. } => {
                assert_eq!(key, "TOKEN_FILE");
                assert_eq!(path, missing);
            }
            other => panic!("Expected SecretRead, got: {other:?}"),
        }
    }
}
