//! Console protocol errors.

use rookery_core::CoordError;

/// Errors that can occur while reading or parsing console input.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command that needs a square was given none.
    #[error("missing square for {command}")]
    MissingSquare {
        /// The command keyword.
        command: String,
    },

    /// A square argument could not be parsed.
    #[error("invalid square: {source}")]
    InvalidSquare {
        /// The underlying coordinate error.
        #[from]
        source: CoordError,
    },

    /// `set` named an option the console does not know.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` was given a value the option cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred on stdin or stdout.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
