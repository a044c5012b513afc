//! Settable flag values.
//!
//! [`FlagValue`] is the setter contract the resolver writes through. Two
//! implementations ship with the crate: [`Typed`] for anything implementing
//! `FromStr + Display`, and [`Switch`] for boolean flags, which accepts the
//! usual spellings of true and false and can be given without a value.

use std::any::Any;
use std::fmt::Display;
use std::str::FromStr;

/// A flag's typed storage plus its string setter.
pub trait FlagValue {
    /// Parse `raw` and store it. The error is a human-readable reason.
    fn set(&mut self, raw: &str) -> Result<(), String>;

    /// Boolean flags may appear without a value, which means true.
    fn is_bool_flag(&self) -> bool {
        false
    }

    /// Current value as text, used for usage output and the config-flag path.
    fn render(&self) -> String;

    fn as_any(&self) -> &dyn Any;
}

/// Storage for any `FromStr` type.
#[derive(Debug, Clone, PartialEq)]
pub struct Typed<T> {
    value: T,
}

impl<T> Typed<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T> FlagValue for Typed<T>
where
    T: FromStr + Display + 'static,
    T::Err: Display,
{
    fn set(&mut self, raw: &str) -> Result<(), String> {
        self.value = raw.parse::<T>().map_err(|e| e.to_string())?;
        Ok(())
    }

    fn render(&self) -> String {
        self.value.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Boolean storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Switch(pub bool);

impl FlagValue for Switch {
    fn set(&mut self, raw: &str) -> Result<(), String> {
        self.0 = parse_bool(raw)?;
        Ok(())
    }

    fn is_bool_flag(&self) -> bool {
        true
    }

    fn render(&self) -> String {
        self.0.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Case-insensitive: `true/false`, `1/0`, `yes/no`, `y/n`, `on/off`, `t/f`.
pub fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Ok(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Ok(false),
        _ => Err(format!("cannot parse {raw:?} as a boolean")),
    }
}
