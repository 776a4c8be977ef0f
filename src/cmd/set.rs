/*!
set.rs

`CommandSet`: an ordered list of commands, an optional default command and
a display name. Owns top-level dispatch:

  no subcommand token  -> run the default command, or show help
  token names a command -> run it (first match in registration order wins)
  token is -h / --help  -> show help
  anything else         -> InvalidCommand

Help is written to stderr (or the writer given to `execute_with_output`)
and reported as `Error::NeededHelp`, which callers treat as a successful
exit.
*/

use std::collections::HashSet;
use std::io::Write;

use crate::cmd::command::Command;
use crate::cmd::config::Config;
use crate::cmd::usage;
use crate::error::{Error, Result};

pub struct CommandSet<C> {
    pub name: String,
    /// Command run when no subcommand token is given. Empty means none.
    pub default_command: String,
    pub commands: Vec<Command<C>>,
}

impl<C: Config> CommandSet<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_command: String::new(),
            commands: Vec::new(),
        }
    }

    pub fn with_default(mut self, name: impl Into<String>) -> Self {
        self.default_command = name.into();
        self
    }

    /// Register a command after the existing ones.
    pub fn command(mut self, command: Command<C>) -> Self {
        self.commands.push(command);
        self
    }

    /// First registered command with the given name.
    pub fn find(&self, name: &str) -> Option<&Command<C>> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Check the registration data up front: names are non-empty and unique,
    /// and the default command (if any) is registered.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for command in &self.commands {
            if command.name.is_empty() {
                return Err(Error::EmptyCommandName);
            }
            if !seen.insert(command.name.as_str()) {
                return Err(Error::DuplicateCommand {
                    name: command.name.clone(),
                });
            }
        }
        if !self.default_command.is_empty() && self.find(&self.default_command).is_none() {
            return Err(Error::NoDefaultDefined {
                name: self.default_command.clone(),
            });
        }
        Ok(())
    }

    /// Top-level usage text.
    pub fn usage(&self) -> String {
        usage::top_level(
            &self.name,
            self.commands
                .iter()
                .map(|c| (c.name.as_str(), c.description.as_str())),
        )
    }

    /// Dispatch on the process arguments, read once here.
    pub fn execute_from_env(&self, config: &mut C) -> Result<()> {
        let args: Vec<String> = std::env::args().collect();
        self.execute(config, &args)
    }

    /// Match `args` to a command, then run that command.
    ///
    /// `args[0]` is the invocation name and `args[1]` the subcommand token.
    /// Top-level usage goes to stderr.
    pub fn execute(&self, config: &mut C, args: &[String]) -> Result<()> {
        self.execute_with_output(config, args, &mut std::io::stderr())
    }

    /// Like [`CommandSet::execute`], writing top-level usage to `out`.
    pub fn execute_with_output(
        &self,
        config: &mut C,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<()> {
        let Some(token) = args.get(1) else {
            if !self.default_command.is_empty() {
                return self.run_default(config);
            }
            tracing::debug!(set = %self.name, "no command given and no default; showing help");
            return Err(self.needed_help(out));
        };

        if let Some(command) = self.commands.iter().find(|c| c.matches(args)) {
            tracing::debug!(command = %command.name, "dispatching");
            return command.execute(config, args);
        }

        if token != "-h" && token != "--help" {
            tracing::debug!(token = %token, "no command matches");
            return Err(Error::InvalidCommand {
                name: token.clone(),
            });
        }
        Err(self.needed_help(out))
    }

    fn run_default(&self, config: &mut C) -> Result<()> {
        let args = [self.name.clone(), self.default_command.clone()];
        match self.commands.iter().find(|c| c.matches(&args)) {
            Some(command) => {
                tracing::debug!(command = %command.name, "running default command");
                command.execute(config, &args)
            }
            None => Err(Error::NoDefaultDefined {
                name: self.default_command.clone(),
            }),
        }
    }

    fn needed_help(&self, out: &mut dyn Write) -> Error {
        let _ = out.write_all(self.usage().as_bytes());
        Error::NeededHelp
    }
}
