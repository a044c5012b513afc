use crate::flagset::FlagSet;
use crate::types::ResolveOptions;

/// Builder for a [`FlagSet`] and the options its resolution passes use.
///
/// ```ignore
/// let mut flags = FlagSet::builder("myapp")
///     .env_prefix("MYAPP")
///     .read_file_indirection(true)
///     .trim_file_content(true)
///     .build();
/// ```
pub struct FlagSetBuilder {
    name: String,
    options: ResolveOptions,
}

impl FlagSetBuilder {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: ResolveOptions::default(),
        }
    }

    /// Prefix for environment keys: with `"MYAPP"`, flag `port` reads
    /// `MYAPP_PORT`. Default: no prefix.
    pub fn env_prefix(mut self, prefix: &str) -> Self {
        self.options.env_prefix = prefix.to_string();
        self
    }

    /// Disable the environment stage entirely.
    pub fn no_env(mut self) -> Self {
        self.options.env_enabled = false;
        self
    }

    /// Fall back to `<KEY>_FILE` when `<KEY>` is unset (default: `false`).
    pub fn read_file_indirection(mut self, enabled: bool) -> Self {
        self.options.read_file_indirection = enabled;
        self
    }

    /// Trim whitespace around values read through `<KEY>_FILE` (default: `false`).
    pub fn trim_file_content(mut self, enabled: bool) -> Self {
        self.options.trim_file_content = enabled;
        self
    }

    /// Name of the flag holding config file paths (default: `"config"`).
    pub fn config_flag(mut self, name: &str) -> Self {
        self.options.config_flag = Some(name.to_string());
        self
    }

    /// Never read config files, even if a flag named `config` exists.
    pub fn no_config_flag(mut self) -> Self {
        self.options.config_flag = None;
        self
    }

    pub fn build(self) -> FlagSet {
        FlagSet::with_options(&self.name, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let flags = FlagSet::builder("myapp").build();
        assert_eq!(flags.name(), "myapp");
        assert_eq!(flags.options(), &ResolveOptions::default());
    }

    #[test]
    fn every_knob() {
        let flags = FlagSet::builder("myapp")
            .env_prefix("MYAPP")
            .read_file_indirection(true)
            .trim_file_content(true)
            .config_flag("settings")
            .build();
        let opts = flags.options();
        assert_eq!(opts.env_prefix, "MYAPP");
        assert!(opts.read_file_indirection);
        assert!(opts.trim_file_content);
        assert_eq!(opts.config_flag.as_deref(), Some("settings"));
    }

    #[test]
    fn no_env_disables_stage() {
        let flags = FlagSet::builder("myapp").no_env().build();
        assert!(!flags.options().env_enabled);
    }

    #[test]
    fn no_config_flag() {
        let flags = FlagSet::builder("myapp").no_config_flag().build();
        assert_eq!(flags.options().config_flag, None);
    }

    #[test]
    fn instances_do_not_share_options() {
        let a = FlagSet::builder("a").env_prefix("A").build();
        let b = FlagSet::builder("b").build();
        assert_eq!(a.options().env_prefix, "A");
        assert!(b.options().env_prefix.is_empty());
    }
}
