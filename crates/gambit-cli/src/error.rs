//! Terminal front end errors.

use gambit_core::MoveError;

/// Errors that can occur while reading and executing commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A token that should name a square is not one (e.g. `i9`).
    #[error("invalid square: {token}")]
    InvalidSquare {
        /// The offending token.
        token: String,
    },

    /// A command is missing one of its arguments.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// Description of the missing argument.
        what: &'static str,
    },

    /// `set` named an unknown option or a value other than `on`/`off`.
    #[error("invalid option: {text}")]
    InvalidOption {
        /// The rejected option text.
        text: String,
    },

    /// The core refused the move.
    #[error(transparent)]
    IllegalMove(#[from] MoveError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
