//! Dispatcher error type.
//!
//! Every failure the dispatcher can produce is a variant here, including the
//! "help was shown" signal, so callers can match on kinds instead of strings.
//! Handler errors pass through untouched in [`Error::Handler`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A command was asked to run against arguments that name another command.
    #[error("attempted to execute the {command} command with the wrong command name")]
    WrongCommand { command: String },

    #[error("could not parse arguments for the {command:?} command")]
    ParseIncomplete { command: String },

    #[error("invalid flags for the {command:?} command: {}", .source.kind())]
    Flags {
        command: String,
        #[source]
        source: clap::Error,
    },

    /// The configuration rejected the parsed flag values.
    #[error("could not apply flags for the {command:?} command: {source}")]
    Config {
        command: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("the '{command}' command should have {required} or more arguments")]
    TooFewArgs { command: String, required: usize },

    #[error("{name:?} is not a valid command")]
    InvalidCommand { name: String },

    #[error("this command set does not define its own default command, {name}")]
    NoDefaultDefined { name: String },

    #[error("the {name:?} command is registered more than once")]
    DuplicateCommand { name: String },

    #[error("a command with an empty name cannot be matched")]
    EmptyCommandName,

    /// Usage text has already been written; not a failure.
    #[error("")]
    NeededHelp,

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl Error {
    pub fn is_help(&self) -> bool {
        matches!(self, Error::NeededHelp)
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NeededHelp => 0,
            Error::Flags { source, .. } => source.exit_code(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_is_benign() {
        let err = Error::NeededHelp;
        assert!(err.is_help());
        assert_eq!(err.exit_code(), 0);
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn real_failures_exit_non_zero() {
        let err = Error::InvalidCommand {
            name: "deploy".into(),
        };
        assert!(!err.is_help());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "\"deploy\" is not a valid command");
    }

    #[test]
    fn too_few_args_message() {
        let err = Error::TooFewArgs {
            command: "add".into(),
            required: 2,
        };
        assert_eq!(
            err.to_string(),
            "the 'add' command should have 2 or more arguments"
        );
    }

    #[test]
    fn handler_error_is_transparent() {
        let err = Error::from(anyhow::anyhow!("disk full"));
        assert_eq!(err.to_string(), "disk full");
        match err {
            Error::Handler(inner) => assert_eq!(inner.to_string(), "disk full"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn flag_errors_use_parser_exit_code() {
        let source = clap::Error::new(clap::error::ErrorKind::UnknownArgument);
        let err = Error::Flags {
            command: "echo".into(),
            source,
        };
        assert_eq!(err.exit_code(), 2);
    }
}
