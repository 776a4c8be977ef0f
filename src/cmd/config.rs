//! The configuration capability the dispatcher hands to every command.
//!
//! A configuration decides which flags each command accepts and receives the
//! parsed values back. The dispatcher never looks inside it; it only passes
//! it through to handlers.

use clap::ArgMatches;

pub trait Config {
    /// Add the flags accepted by `command` to its flag schema.
    ///
    /// Declare flags only: positional arguments are collected by the
    /// dispatcher and handed to the command's handler.
    fn declare_flags(&self, command: &str, flags: clap::Command) -> clap::Command;

    /// Store parsed flag values for `command`.
    fn apply_flags(&mut self, command: &str, matches: &ArgMatches) -> anyhow::Result<()> {
        let _ = (command, matches);
        Ok(())
    }
}

/// A configuration that declares no flags.
impl Config for () {
    fn declare_flags(&self, _command: &str, flags: clap::Command) -> clap::Command {
        flags
    }
}
