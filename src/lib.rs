//! Minimal subcommand dispatcher.
//!
//! A [`CommandSet`] selects one registered [`Command`] by name from the
//! argument list, parses that command's flags (declared by a [`Config`]),
//! checks its minimum positional argument count, and runs its handler.
//!
//! ```no_run
//! use subcommander::{Command, CommandSet};
//!
//! fn hello(_: &mut (), args: &[String]) -> anyhow::Result<()> {
//!     println!("hello {}", args.join(" "));
//!     Ok(())
//! }
//!
//! let set = CommandSet::new("greeter").command(Command::new("hello", "say hello", hello).args_required(1));
//! if let Err(err) = set.execute_from_env(&mut ()) {
//!     if !err.is_help() {
//!         eprintln!("error: {err}");
//!     }
//!     std::process::exit(err.exit_code());
//! }
//! ```

pub mod cmd;
pub mod error;
pub mod utils;

pub use cmd::{Command, CommandSet, Config, Handler};
pub use error::{Error, Result};
