//! Command-line stage, backed by [clap](https://docs.rs/clap).
//!
//! Compiled only with the `clap` Cargo feature (on by default). Without it,
//! apply command-line values yourself with [`FlagSet::set`] and then call
//! [`FlagSet::resolve`].
//!
//! Every registered flag becomes a clap argument: multi-character names are
//! long options (`--name`), single characters are short options (`-n`).
//! Go-style single-dash long options (`-name`, `-name=value`) are accepted
//! too and rewritten before clap sees them. Boolean flags take an optional
//! value that must be attached with `=`, so `--verbose` means true and
//! `--verbose=false` turns it off.
//!
//! Flag parsing stops at `--` or at the first positional argument; the rest
//! is available from [`FlagSet::args`].

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command};
use tracing::debug;

use crate::env::EnvTable;
use crate::error::{FlagError, Source};
use crate::flagset::FlagSet;
use crate::registry::FlagRegistry;
use crate::resolve;

const ARGS_ID: &str = "flaglayer-positional";

impl FlagSet {
    /// The clap command for this flag set.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.name().to_string())
            .disable_version_flag(true)
            .args_override_self(true);
        if self.lookup("help").is_some() || self.lookup("h").is_some() {
            cmd = cmd.disable_help_flag(true);
        }

        for flag in self.flags() {
            let mut arg = Arg::new(flag.name().to_string())
                .help(flag.usage().to_string())
                .action(ArgAction::Set);
            let mut chars = flag.name().chars();
            arg = match (chars.next(), chars.next()) {
                (Some(c), None) => arg.short(c),
                _ => arg.long(flag.name().to_string()),
            };
            arg = if flag.value().is_bool_flag() {
                arg.num_args(0..=1)
                    .require_equals(true)
                    .default_missing_value("true")
            } else {
                arg.allow_hyphen_values(true)
            };
            cmd = cmd.arg(arg);
        }

        cmd.arg(
            Arg::new(ARGS_ID)
                .action(ArgAction::Append)
                .num_args(1..)
                .trailing_var_arg(true)
                .hide(true),
        )
    }

    /// Parse command-line arguments (program name first), then run the
    /// environment and config file stages against the process environment.
    pub fn parse<I, T>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.parse_with_env(args, &EnvTable::capture())
    }

    /// Like [`parse`](Self::parse), against an explicit environment.
    pub fn parse_with_env<I, T>(&mut self, args: I, env: &EnvTable) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.parse_args(args)?;
        self.resolve(env)
    }

    /// Apply only the command-line stage.
    pub fn parse_args<I, T>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args = self.normalize_args(args.into_iter().map(Into::into).collect());
        let matches = match self.command().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                self.emit_usage();
                return Err(FlagError::HelpRequested);
            }
            Err(err) => return Err(err.into()),
        };

        for name in self.names() {
            if matches.value_source(&name) != Some(ValueSource::CommandLine) {
                continue;
            }
            if let Some(raw) = matches.get_one::<String>(&name) {
                resolve::apply_value(self, &name, Some(raw.as_str()), Source::CommandLine)?;
                debug!(flag = %name, "applied from command line");
            }
        }

        let rest: Vec<String> = matches
            .get_many::<String>(ARGS_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        self.set_args(rest);
        Ok(())
    }

    /// Rewrite `-name` to `--name` for registered multi-character flags.
    /// Stops at `--` or the first positional argument.
    fn normalize_args(&self, args: Vec<String>) -> Vec<String> {
        let mut out = Vec::with_capacity(args.len());
        let mut iter = args.into_iter();
        out.extend(iter.next());

        let mut expect_value = false;
        while let Some(arg) = iter.next() {
            if expect_value {
                expect_value = false;
                out.push(arg);
                continue;
            }
            if arg == "--" || arg == "-" || !arg.starts_with('-') {
                out.push(arg);
                out.extend(iter);
                break;
            }

            let body = arg.trim_start_matches('-');
            let (name, inline) = match body.split_once('=') {
                Some((name, _)) => (name, true),
                None => (body, false),
            };
            let known = self.lookup(name);
            if let Some(value) = known
                && !inline
                && !value.is_bool_flag()
            {
                expect_value = true;
            }

            let single_dash = !arg.starts_with("--");
            if single_dash && name.chars().count() > 1 && (known.is_some() || name == "help") {
                out.push(format!("-{arg}"));
            } else {
                out.push(arg);
            }
        }
        out
    }
}
