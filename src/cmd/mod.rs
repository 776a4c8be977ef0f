/*!
Subcommand dispatch.

Layout:
  src/cmd/
    mod.rs      (this file: module declarations + re-exports)
    config.rs   (Config: declares each command's flags, receives their values)
    command.rs  (Command: match one subcommand token, parse flags, run handler)
    set.rs      (CommandSet: pick a command, default command, top-level help)
    usage.rs    (plain-text usage rendering)

Conventions:
  - Argument lists are passed explicitly; only `CommandSet::execute_from_env`
    reads the process arguments.
  - Each `Command::execute` builds a fresh flag schema; nothing global is
    mutated between commands.
  - Every outcome is a `crate::Error` value, including "help was shown".
*/

pub mod command;
pub mod config;
pub mod set;
pub mod usage;

pub use command::{Command, Handler};
pub use config::Config;
pub use set::CommandSet;
