use subcommander::{Error, utils};

mod demo;

use demo::DemoConfig;

/// subcommander demo binary
///
///   subcommander echo [--upper] [--separator SEP] <words...>
///   subcommander add [--precision N] <a> <b> [more...]
///   subcommander show-config            (also the default with no command)
///   subcommander -h | --help
///
/// SUBCOMMANDER_CONFIG names a YAML or JSON file with defaults
/// (upper, separator, precision, verbose, quiet). RUST_LOG overrides the
/// log level derived from verbose/quiet.
fn main() {
    let mut config = match DemoConfig::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };

    utils::init_logging(utils::derive_level(config.verbose, config.quiet));

    let commands = demo::commands();
    if let Err(e) = commands.validate() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = commands.execute_from_env(&mut config) {
        // Help text and parse errors have already been written to stderr.
        if !matches!(e, Error::NeededHelp | Error::Flags { .. }) {
            eprintln!("error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
