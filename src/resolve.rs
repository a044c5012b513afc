//! Precedence resolution: apply environment and config file values to the
//! flags that no higher-priority source has set yet.
//!
//! Order within one pass:
//!
//! 1. Command line (done by the caller, which marks those flags applied)
//! 2. `<KEY>` environment variables
//! 3. `<KEY>_FILE` indirection, when enabled
//! 4. Config files, in the order they are listed
//!
//! Every write is preceded by a ledger check, so each flag is written by at
//! most one source. A failure stops the pass; flags applied before it stay
//! applied.

use std::path::Path;

use tracing::{debug, trace};

use crate::env::EnvTable;
use crate::error::{FlagError, Source};
use crate::file;
use crate::naming::{self, ReverseKeys};
use crate::plain;
use crate::registry::FlagRegistry;
use crate::secret;
use crate::toml_table;
use crate::types::{ConfigFormat, KeyedCell, ResolveOptions, ScalarCell};
use crate::yaml;

/// Run the environment stage, then the file stage for the files named by the
/// config flag.
///
/// The config flag is read after the environment stage, so `CONFIG=...` in
/// the environment can choose the file. Its value may list several paths
/// (`std::env::split_paths` syntax); earlier files take precedence.
pub fn resolve<R: FlagRegistry + ?Sized>(
    registry: &mut R,
    env: &EnvTable,
    options: &ResolveOptions,
) -> Result<(), FlagError> {
    if options.env_enabled {
        apply_env(registry, env, options)?;
    }

    let Some(config_flag) = options.config_flag.as_deref() else {
        return Ok(());
    };
    let Some(list) = registry.lookup(config_flag).map(|v| v.render()) else {
        return Ok(());
    };

    for path in file::split_config_paths(&list) {
        apply_file(registry, &path, options)?;
    }
    Ok(())
}

/// Apply environment values to every flag not yet applied.
pub fn apply_env<R: FlagRegistry + ?Sized>(
    registry: &mut R,
    env: &EnvTable,
    options: &ResolveOptions,
) -> Result<(), FlagError> {
    debug!(prefix = %options.env_prefix, vars = env.len(), "applying environment");

    for name in registry.names() {
        if registry.is_applied(&name) {
            trace!(flag = %name, "already set, skipping environment");
            continue;
        }

        let key = naming::to_env_key(&name, &options.env_prefix);
        let value = match env.get(&key) {
            Some(value) => value.to_string(),
            None => match secret::resolve_indirect(env, &key, options)? {
                Some(value) => value,
                None => continue,
            },
        };

        // An empty value counts as bare presence: true for a boolean flag.
        let raw = Some(value.as_str()).filter(|v| !v.is_empty());
        apply_value(registry, &name, raw, Source::Environment)?;
        debug!(flag = %name, key = %key, "applied from environment");
    }
    Ok(())
}

/// Apply one config file, choosing the parser by extension.
pub fn apply_file<R: FlagRegistry + ?Sized>(
    registry: &mut R,
    path: &Path,
    options: &ResolveOptions,
) -> Result<(), FlagError> {
    let content = file::read_config(path)?;
    let format = ConfigFormat::from_path(path);
    debug!(path = %path.display(), ?format, "applying config file");

    match format {
        ConfigFormat::Plain => apply_plain(registry, &content, options),
        ConfigFormat::Yaml => {
            let cells = yaml::parse_yaml(&content, path)?;
            apply_cells(registry, cells, path, options)
        }
        ConfigFormat::Toml => {
            let cells = toml_table::parse_toml(&content, path)?;
            apply_cells(registry, cells, path, options)
        }
    }
}

/// Apply plain-text config content. Entries are applied in file order and the
/// first failure stops the remaining lines.
pub fn apply_plain<R: FlagRegistry + ?Sized>(
    registry: &mut R,
    content: &str,
    options: &ResolveOptions,
) -> Result<(), FlagError> {
    let names = registry.names();
    let reverse = ReverseKeys::new(names.iter().map(String::as_str), &options.env_prefix);

    for entry in plain::parse_plain(content) {
        // Only `key=value` lines may use the env-style key.
        let name = if entry.has_value() {
            reverse.canonical(&entry.name).to_string()
        } else {
            entry.name
        };
        if registry.is_applied(&name) {
            trace!(flag = %name, line = entry.line, "already set, skipping config line");
            continue;
        }
        apply_value(registry, &name, entry.value.as_deref(), Source::Configuration)?;
        debug!(flag = %name, line = entry.line, "applied from config file");
    }
    Ok(())
}

/// Apply decoded YAML or TOML cells. Composite values fail with the key's
/// line; scalars always go through the setter, even for boolean flags.
pub fn apply_cells<R: FlagRegistry + ?Sized>(
    registry: &mut R,
    cells: Vec<KeyedCell>,
    path: &Path,
    options: &ResolveOptions,
) -> Result<(), FlagError> {
    let names = registry.names();
    let reverse = ReverseKeys::new(names.iter().map(String::as_str), &options.env_prefix);

    for KeyedCell { key, cell, line } in cells {
        let name = reverse.canonical(&key).to_string();
        if registry.is_applied(&name) {
            trace!(flag = %name, ?line, "already set, skipping config key");
            continue;
        }
        if registry.lookup(&name).is_none() {
            return Err(unknown_name(registry, name, Source::Configuration));
        }
        match cell {
            ScalarCell::NotScalar(kind) => {
                return Err(FlagError::NotScalar {
                    name,
                    path: path.to_path_buf(),
                    line,
                    kind,
                });
            }
            ScalarCell::Scalar(value) => {
                apply_value(registry, &name, Some(&value), Source::Configuration)?;
                debug!(flag = %name, ?line, "applied from config file");
            }
        }
    }
    Ok(())
}

/// Write one value through the flag's setter and record it in the ledger.
///
/// `raw == None` is a bare flag: a boolean flag becomes true, any other flag
/// receives the empty string.
pub(crate) fn apply_value<R: FlagRegistry + ?Sized>(
    registry: &mut R,
    name: &str,
    raw: Option<&str>,
    origin: Source,
) -> Result<(), FlagError> {
    let Some(flag) = registry.lookup_mut(name) else {
        return Err(unknown_name(registry, name.to_string(), origin));
    };

    if flag.is_bool_flag() {
        let value = raw.unwrap_or("true");
        flag.set(value).map_err(|reason| FlagError::InvalidBoolean {
            origin,
            name: name.to_string(),
            value: value.to_string(),
            reason,
        })?;
    } else {
        let value = raw.unwrap_or("");
        flag.set(value).map_err(|reason| FlagError::InvalidValue {
            origin,
            name: name.to_string(),
            value: value.to_string(),
            reason,
        })?;
    }

    registry.mark_applied(name);
    Ok(())
}

fn unknown_name<R: FlagRegistry + ?Sized>(registry: &R, name: String, origin: Source) -> FlagError {
    if name == "help" || name == "h" {
        registry.emit_usage();
        return FlagError::HelpRequested;
    }
    FlagError::UnknownName { origin, name }
}
