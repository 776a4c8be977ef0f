/*!
Demo configuration and command registry for the `subcommander` binary.

Config sources (later wins):
  1. built-in defaults
  2. file named by SUBCOMMANDER_CONFIG (.yaml/.yml via serde_yaml, else JSON)
  3. command-line flags declared per command

Commands:
  echo <words...>          join words (--upper, --separator SEP)
  add <a> <b> [more...]    sum numbers (--precision N)
  show-config              print the effective configuration (default)
*/

pub mod handlers;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches};
use serde::{Deserialize, Serialize};
use subcommander::{Command, CommandSet, Config};

pub const CONFIG_ENV: &str = "SUBCOMMANDER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub upper: bool,
    pub separator: String,
    /// Decimal places; bounded by what `format!` precision accepts.
    pub precision: u16,
    pub verbose: u8,
    pub quiet: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            upper: false,
            separator: " ".to_string(),
            precision: 2,
            verbose: 0,
            quiet: false,
        }
    }
}

impl DemoConfig {
    /// Defaults, overlaid with the file named by `SUBCOMMANDER_CONFIG` if set.
    pub fn load_from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let lower = path.to_string_lossy().to_ascii_lowercase();

        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            serde_yaml::from_str(&raw).context("failed to parse YAML config file")
        } else {
            serde_json::from_str(&raw).context("failed to parse JSON config file")
        }
    }
}

impl Config for DemoConfig {
    fn declare_flags(&self, command: &str, flags: clap::Command) -> clap::Command {
        match command {
            "echo" => flags
                .arg(
                    Arg::new("upper")
                        .long("upper")
                        .action(ArgAction::SetTrue)
                        .help("Upper-case the output"),
                )
                .arg(
                    Arg::new("separator")
                        .long("separator")
                        .value_name("SEP")
                        .help("String placed between words"),
                ),
            "add" => flags.arg(
                Arg::new("precision")
                    .long("precision")
                    .value_name("N")
                    .value_parser(clap::value_parser!(u16))
                    .help("Decimal places in the result"),
            ),
            _ => flags,
        }
    }

    fn apply_flags(&mut self, command: &str, matches: &ArgMatches) -> Result<()> {
        match command {
            "echo" => {
                if matches.get_flag("upper") {
                    self.upper = true;
                }
                if let Some(sep) = matches.get_one::<String>("separator") {
                    self.separator = sep.clone();
                }
            }
            "add" => {
                if let Some(precision) = matches.get_one::<u16>("precision") {
                    self.precision = *precision;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// The binary's command registry.
pub fn commands() -> CommandSet<DemoConfig> {
    CommandSet::new("subcommander")
        .with_default("show-config")
        .command(
            Command::new("echo", "print the arguments joined together", handlers::echo)
                .args_required(1),
        )
        .command(Command::new("add", "add two or more numbers", handlers::add).args_required(2))
        .command(Command::new(
            "show-config",
            "print the effective configuration as JSON",
            handlers::show_config,
        ))
}
