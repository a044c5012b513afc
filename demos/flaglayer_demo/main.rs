//! # flaglayer demo application
//!
//! A small greeter that shows how the command line, environment variables
//! and config files combine. It exists to try flaglayer by hand.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example flaglayer_demo -- --name Ada
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature              | How to exercise it                                                   |
//! |----------------------|----------------------------------------------------------------------|
//! | Defaults             | `cargo run --example flaglayer_demo`                                 |
//! | Command line         | `cargo run --example flaglayer_demo -- -name Ada -age 36`            |
//! | Environment          | `DEMO_LAST_NAME=Lovelace cargo run --example flaglayer_demo`         |
//! | `_FILE` indirection  | `DEMO_NAME_FILE=/run/secrets/name cargo run --example flaglayer_demo` |
//! | Config file          | `cargo run --example flaglayer_demo -- --config demo.yml`            |
//! | Several config files | `cargo run --example flaglayer_demo -- --config a.yml:b.conf`        |
//! | Debug logging        | `RUST_LOG=flaglayer=debug cargo run --example flaglayer_demo`        |

use std::process::ExitCode;

use flaglayer::FlagSet;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut flags = FlagSet::builder("flaglayer-demo")
        .env_prefix("DEMO")
        .read_file_indirection(true)
        .trim_file_content(true)
        .build();
    flags
        .string("name", "World", "first name to greet")
        .string("last-name", "", "last name to greet")
        .define("age", 0u32, "age in years")
        .define("length", 1.75f64, "height in meters")
        .bool("female", false, "use the female salutation")
        .string("config", "", "config file(s) to read");

    if let Err(err) = flags.parse(std::env::args()) {
        if err.is_help() {
            return ExitCode::SUCCESS;
        }
        eprintln!("error: {err}");
        return ExitCode::from(2);
    }

    let name = flags.get::<String>("name").unwrap_or_default();
    let last_name = flags.get::<String>("last-name").unwrap_or_default();
    let salutation = if flags.get::<bool>("female").unwrap_or(false) {
        "Ms."
    } else {
        "Mr."
    };

    println!("{}", format!("Hello {salutation} {name} {last_name}").trim_end());
    if flags.is_set("age") {
        println!("  age:    {}", flags.get::<u32>("age").unwrap_or_default());
    }
    println!("  length: {}m", flags.get::<f64>("length").unwrap_or_default());
    if !flags.args().is_empty() {
        println!("  args:   {}", flags.args().join(" "));
    }
    ExitCode::SUCCESS
}
