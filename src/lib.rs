//! Layered flag values for Rust command-line programs. Register flags, parse
//! the command line, and let the environment and config files fill in the
//! rest.
//!
//! ```ignore
//! let mut flags = FlagSet::builder("myapp").env_prefix("MYAPP").build();
//! flags
//!     .string("host", "localhost", "address to bind")
//!     .define("port", 8080u16, "port to listen on")
//!     .string("config", "", "config file(s)");
//! flags.parse(std::env::args())?;
//! let port: u16 = flags.get("port").unwrap_or(8080);
//! ```
//!
//! That single call reads `--port` from the command line, falls back to
//! `MYAPP_PORT` in the environment, then to `port` in the file named by
//! `--config`, and finally keeps the registered default.
//!
//! # Layer precedence
//!
//! ```text
//! Registered default    flags.define("port", 8080u16, ...)
//!        ↑ overridden by
//! Config files          --config a.yml:b.conf, earlier files win
//!        ↑ overridden by
//! <KEY>_FILE            contents of the file it points to (opt-in)
//!        ↑ overridden by
//! <KEY>                 MYAPP_PORT=9000
//!        ↑ overridden by
//! Command line          --port 9000
//! ```
//!
//! Every flag is written at most once per pass. Sources run from highest to
//! lowest priority and each one skips flags that an earlier one already set,
//! so nothing is overwritten and [`FlagSet::is_set`] tells you whether the
//! value came from anywhere but the default.
//!
//! # Environment keys
//!
//! A flag name maps to its key by uppercasing and replacing `-` and `.` with
//! `_`, then prepending the prefix and an underscore if one is set:
//!
//! | Flag | Prefix | Key |
//! |------|--------|-----|
//! | `port` | none | `PORT` |
//! | `last-name` | `MYAPP` | `MYAPP_LAST_NAME` |
//! | `db.url` | `MYAPP` | `MYAPP_DB_URL` |
//!
//! An empty value counts as "present": a boolean flag becomes true, any
//! other flag receives the empty string.
//!
//! With [`read_file_indirection`](FlagSetBuilder::read_file_indirection),
//! an unset `<KEY>` falls back to `<KEY>_FILE`, whose value is a path to read
//! the real value from. This is the usual way to hand secrets to containers.
//!
//! # Config files
//!
//! The flag named `config` (rename it with
//! [`config_flag`](FlagSetBuilder::config_flag)) lists one or more paths,
//! joined with the platform path separator. It can itself come from the
//! command line or the environment. The extension picks the format:
//!
//! - **`.yml` / `.yaml`**: a mapping of flag names to scalars.
//! - **`.toml`**: a table of flag names to scalars.
//! - **anything else**: one `name value`, `name=value` or `name: value`
//!   per line, `#` comments, a bare `name` for a boolean flag.
//!
//! Keys may be either the flag name or its environment key, so one file can
//! serve as both a `.env` file and a config file. Unknown keys are errors,
//! and so is a listed file that does not exist.
//!
//! # Bring your own flag library
//!
//! The resolver talks to flags only through [`FlagRegistry`]. [`FlagSet`] is
//! the bundled registry; implement the trait for another flag library and
//! call [`resolve`] after its own command-line parsing.
//!
//! # Errors
//!
//! All fallible operations return [`FlagError`]. Messages name the source
//! (flag, environment variable, configuration variable), the flag and the
//! offending value. Enable the `rich-errors` feature for
//! [miette](https://docs.rs/miette) diagnostics with help text.

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod env;
mod file;
mod flagset;
mod naming;
mod plain;
mod registry;
mod resolve;
mod secret;
mod source;
mod toml_table;
mod value;
mod yaml;

#[cfg(test)]
mod fixtures;

pub use builder::FlagSetBuilder;
pub use env::EnvTable;
pub use error::{FlagError, Source};
pub use flagset::{Flag, FlagSet};
pub use naming::to_env_key;
pub use registry::FlagRegistry;
pub use resolve::{apply_env, apply_file, resolve};
pub use types::{ConfigFormat, ResolveOptions};
pub use value::{FlagValue, Switch, Typed, parse_bool};
