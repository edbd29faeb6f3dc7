//! Terminal front end for gambit: line commands, board rendering, and the session loop.

pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use command::{Command, SessionOption};
pub use error::CliError;
pub use session::{Session, SessionConfig};
