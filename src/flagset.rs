use std::any::Any;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};

use crate::builder::FlagSetBuilder;
use crate::env::EnvTable;
use crate::error::{FlagError, Source};
use crate::naming;
use crate::registry::FlagRegistry;
use crate::resolve;
use crate::types::ResolveOptions;
use crate::value::{FlagValue, Switch, Typed};

/// A registered flag.
pub struct Flag {
    name: String,
    usage: String,
    default_text: String,
    value: Box<dyn FlagValue>,
}

impl Flag {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// The value at registration time, rendered as text.
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    pub fn value(&self) -> &dyn FlagValue {
        self.value.as_ref()
    }
}

impl std::fmt::Debug for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("value", &self.value.render())
            .finish()
    }
}

/// A set of named flags with an applied ledger.
///
/// Flags are kept in declaration order. Values are read back with
/// [`get`](Self::get); [`is_set`](Self::is_set) tells whether any source
/// (command line, environment, config file) supplied one.
#[derive(Debug)]
pub struct FlagSet {
    name: String,
    formal: IndexMap<String, Flag>,
    actual: IndexSet<String>,
    options: ResolveOptions,
    args: Vec<String>,
}

impl FlagSet {
    /// A flag set with default options: no env prefix, no `_FILE`
    /// indirection, config file paths read from a flag named `config`.
    pub fn new(name: &str) -> Self {
        Self::with_options(name, ResolveOptions::default())
    }

    pub fn builder(name: &str) -> FlagSetBuilder {
        FlagSetBuilder::new(name)
    }

    pub fn with_options(name: &str, options: ResolveOptions) -> Self {
        Self {
            name: name.to_string(),
            formal: IndexMap::new(),
            actual: IndexSet::new(),
            options,
            args: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Register a flag with custom storage.
    ///
    /// # Panics
    ///
    /// Panics if a flag with the same name is already registered.
    pub fn var(&mut self, name: &str, usage: &str, value: Box<dyn FlagValue>) -> &mut Self {
        if self.formal.contains_key(name) {
            panic!("flaglayer: flag redefined: {name}");
        }
        let flag = Flag {
            name: name.to_string(),
            usage: usage.to_string(),
            default_text: value.render(),
            value,
        };
        self.formal.insert(name.to_string(), flag);
        self
    }

    /// Register a flag of any `FromStr` type.
    pub fn define<T>(&mut self, name: &str, default: T, usage: &str) -> &mut Self
    where
        T: FromStr + Display + 'static,
        T::Err: Display,
    {
        self.var(name, usage, Box::new(Typed::new(default)))
    }

    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> &mut Self {
        self.define(name, default.to_string(), usage)
    }

    /// Register a boolean flag. It may be given without a value.
    pub fn bool(&mut self, name: &str, default: bool, usage: &str) -> &mut Self {
        self.var(name, usage, Box::new(Switch(default)))
    }

    /// Current value of a flag registered with [`define`](Self::define),
    /// [`string`](Self::string) or [`bool`](Self::bool). `None` when the name
    /// is unknown or `T` is not the registered type.
    pub fn get<T: Clone + 'static>(&self, name: &str) -> Option<T> {
        let value = self.formal.get(name)?.value.as_any();
        if let Some(typed) = value.downcast_ref::<Typed<T>>() {
            return Some(typed.get().clone());
        }
        value
            .downcast_ref::<Switch>()
            .and_then(|switch| (&switch.0 as &dyn Any).downcast_ref::<T>().cloned())
    }

    /// Current value of any flag as text.
    pub fn value_text(&self, name: &str) -> Option<String> {
        self.formal.get(name).map(|flag| flag.value.render())
    }

    /// Whether some source has supplied a value for `name`.
    pub fn is_set(&self, name: &str) -> bool {
        self.actual.contains(name)
    }

    /// Set a flag programmatically. Counts as the highest-priority source:
    /// later environment or file values will not override it.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        resolve::apply_value(self, name, Some(raw), Source::CommandLine)
    }

    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.formal.values()
    }

    /// Positional arguments left over after command-line parsing.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub(crate) fn set_args(&mut self, args: Vec<String>) {
        self.args = args;
    }

    /// Apply environment values using this set's options.
    pub fn parse_env(&mut self, env: &EnvTable) -> Result<(), FlagError> {
        let options = self.options.clone();
        resolve::apply_env(self, env, &options)
    }

    /// Apply one config file using this set's options.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<(), FlagError> {
        let options = self.options.clone();
        resolve::apply_file(self, path.as_ref(), &options)
    }

    /// Run the environment and file stages. Call after command-line values
    /// have been applied.
    pub fn resolve(&mut self, env: &EnvTable) -> Result<(), FlagError> {
        let options = self.options.clone();
        resolve::resolve(self, env, &options)
    }

    /// Usage text listing every flag with its default and environment key.
    pub fn usage(&self) -> String {
        let mut out = format!("Usage of {}:\n", self.name);
        for flag in self.formal.values() {
            let dashes = if flag.name.chars().count() == 1 { "-" } else { "--" };
            let placeholder = if flag.value.is_bool_flag() { "" } else { " value" };
            out.push_str(&format!("  {dashes}{}{placeholder}\n    \t{}", flag.name, flag.usage));
            if !flag.default_text.is_empty() {
                out.push_str(&format!(" (default {:?})", flag.default_text));
            }
            if self.options.env_enabled {
                let key = naming::to_env_key(&flag.name, &self.options.env_prefix);
                out.push_str(&format!(" [env {key}]"));
            }
            out.push('\n');
        }
        out
    }
}

impl FlagRegistry for FlagSet {
    fn names(&self) -> Vec<String> {
        self.formal.keys().cloned().collect()
    }

    fn lookup(&self, name: &str) -> Option<&dyn FlagValue> {
        self.formal.get(name).map(|flag| flag.value.as_ref())
    }

    fn lookup_mut(&mut self, name: &str) -> Option<&mut dyn FlagValue> {
        let flag = self.formal.get_mut(name)?;
        Some(flag.value.as_mut())
    }

    fn mark_applied(&mut self, name: &str) {
        self.actual.insert(name.to_string());
    }

    fn is_applied(&self, name: &str) -> bool {
        self.actual.contains(name)
    }

    fn emit_usage(&self) {
        eprint!("{}", self.usage());
    }
}
