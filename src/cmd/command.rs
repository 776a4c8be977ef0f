/*!
command.rs

A single named subcommand: its handler, its minimum positional argument
count, and the logic that parses its flags before running it.

Argument convention (shared with `CommandSet`):
  args[0]  program invocation name (only used in usage text)
  args[1]  subcommand token
  args[2..] flags and positional arguments for the subcommand

Flag parsing stops at the first positional argument; everything after it is
handed to the handler as-is. `--` also ends flag parsing.
*/

use std::fmt;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches};

use crate::cmd::config::Config;
use crate::cmd::usage;
use crate::error::{Error, Result};

/// Id of the dispatcher-owned argument collecting positional tokens.
const POSITIONAL_ID: &str = "subcommander::positional";

/// Id of the replacement help flag used when the configuration claims `-h` or `--help`.
const HELP_ID: &str = "subcommander::help";

/// Handler invoked with the configuration and the leftover positional arguments.
pub type Handler<C> = fn(&mut C, &[String]) -> anyhow::Result<()>;

/// A CLI subcommand and its handler.
pub struct Command<C> {
    pub name: String,
    pub description: String,
    pub run: Handler<C>,
    pub args_required: usize,
}

impl<C: Config> Command<C> {
    pub fn new(name: impl Into<String>, description: impl Into<String>, run: Handler<C>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            run,
            args_required: 0,
        }
    }

    /// Require at least `n` positional arguments.
    pub fn args_required(mut self, n: usize) -> Self {
        self.args_required = n;
        self
    }

    /// True iff `args[1]` names this command.
    pub fn matches<S: AsRef<str>>(&self, args: &[S]) -> bool {
        args.get(1).is_some_and(|token| token.as_ref() == self.name)
    }

    /// Build this command's flag schema with the configuration's flags declared.
    ///
    /// The usage template is attached to the returned schema; rendering its
    /// help yields the per-command usage text.
    pub fn flag_schema(&self, config: &C, program: &str) -> clap::Command {
        let schema = clap::Command::new(self.name.clone())
            .no_binary_name(true)
            .disable_version_flag(true)
            .override_usage(usage::command_line(program, &self.name))
            .help_template(usage::command_template(program, &self.name));

        let schema = yield_help_flag(config.declare_flags(&self.name, schema));

        schema.arg(
            Arg::new(POSITIONAL_ID)
                .value_parser(clap::value_parser!(String))
                .action(ArgAction::Append)
                .num_args(1..)
                .trailing_var_arg(true)
                .hide(true),
        )
    }

    /// Per-command usage text for `program`.
    pub fn usage(&self, config: &C, program: &str) -> String {
        self.flag_schema(config, program).render_help().to_string()
    }

    /// Parse this command's flags from `args`, check the positional count, and
    /// run the handler. The handler's result is returned unchanged.
    pub fn execute(&self, config: &mut C, args: &[String]) -> Result<()> {
        let program = args.first().map(String::as_str).unwrap_or_default();
        let mut schema = self.flag_schema(config, program);

        if !self.matches(args) {
            return Err(Error::WrongCommand {
                command: self.name.clone(),
            });
        }

        let matches = match schema.try_get_matches_from_mut(&args[2..]) {
            Ok(matches) => matches,
            Err(err) => return Err(self.parse_failure(&mut schema, err)),
        };

        // Tokens were claimed by a nested subcommand declared on the schema.
        if matches.subcommand_name().is_some() {
            return Err(Error::ParseIncomplete {
                command: self.name.clone(),
            });
        }

        config
            .apply_flags(&self.name, &matches)
            .map_err(|source| Error::Config {
                command: self.name.clone(),
                source,
            })?;

        let positional = positional_args(&matches);
        if positional.len() < self.args_required {
            return Err(Error::TooFewArgs {
                command: self.name.clone(),
                required: self.args_required,
            });
        }

        tracing::trace!(command = %self.name, args = ?positional, "running handler");
        (self.run)(config, &positional).map_err(Error::Handler)
    }

    fn parse_failure(&self, schema: &mut clap::Command, err: clap::Error) -> Error {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                eprint!("{}", schema.render_help());
                Error::NeededHelp
            }
            _ => {
                eprint!("{}", err.render());
                Error::Flags {
                    command: self.name.clone(),
                    source: err,
                }
            }
        }
    }
}

/// Give `-h` / `--help` to the configuration when it declares them; help
/// stays on whichever of the two is still free.
fn yield_help_flag(schema: clap::Command) -> clap::Command {
    let short_taken = schema.get_arguments().any(|a| a.get_short() == Some('h'));
    let long_taken = schema.get_arguments().any(|a| a.get_long() == Some("help"));
    if !short_taken && !long_taken {
        return schema;
    }

    let schema = schema.disable_help_flag(true);
    if short_taken && long_taken {
        return schema;
    }

    let mut help = Arg::new(HELP_ID)
        .action(ArgAction::Help)
        .help("Print help");
    if !short_taken {
        help = help.short('h');
    }
    if !long_taken {
        help = help.long("help");
    }
    schema.arg(help)
}

fn positional_args(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>(POSITIONAL_ID)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

impl<C> fmt::Debug for Command<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("args_required", &self.args_required)
            .finish_non_exhaustive()
    }
}
