use crate::value::FlagValue;

/// The flag registry the resolver reads from and writes into.
///
/// The resolver never stores values itself: it looks flags up by name, hands
/// raw strings to their setters, and records each successful write in the
/// registry's applied ledger. [`FlagSet`](crate::FlagSet) is the bundled
/// implementation; implement this for another flag library to layer env and
/// file sources on top of it.
pub trait FlagRegistry {
    /// Registered flag names in declaration order. This order drives the
    /// environment stage and breaks ties in reverse key mapping.
    fn names(&self) -> Vec<String>;

    fn lookup(&self, name: &str) -> Option<&dyn FlagValue>;

    fn lookup_mut(&mut self, name: &str) -> Option<&mut dyn FlagValue>;

    /// Record that `name` holds its final value for this pass.
    fn mark_applied(&mut self, name: &str);

    fn is_applied(&self, name: &str) -> bool;

    /// Show usage to the user. Called before a help-requested result.
    fn emit_usage(&self);
}
