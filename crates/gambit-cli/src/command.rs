//! Line command parsing.

use gambit_core::Square;

use crate::error::CliError;

/// A session setting adjustable with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set board on|off` -- reprint the board after every move.
    ShowBoard(bool),
    /// `set markers on|off` -- mark destinations when a square is selected.
    ShowMarkers(bool),
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2` or `select e2` -- show the legal destinations of a piece.
    Select(Square),
    /// `e2e4` or `move e2 e4` -- play a move.
    Move {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// `board` -- print the board.
    Board,
    /// `new` -- start a new game.
    New,
    /// `help` -- list the commands.
    Help,
    /// `set <option> <on|off>` -- change a session setting.
    Set(SessionOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized input.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "board" => Ok(Command::Board),
        "new" => Ok(Command::New),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "select" => {
            let token = tokens.get(1).ok_or(CliError::MissingArgument {
                command: "select",
                what: "square",
            })?;
            Ok(Command::Select(parse_square(token)?))
        }
        "move" => parse_move(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        token if tokens.len() == 1 => parse_shorthand(token),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse a bare `e2` (select) or `e2e4` (move).
fn parse_shorthand(token: &str) -> Result<Command, CliError> {
    match token.len() {
        2 if looks_like_square(token) => Ok(Command::Select(parse_square(token)?)),
        4 if token.is_char_boundary(2) && looks_like_square(&token[..2]) => Ok(Command::Move {
            from: parse_square(&token[..2])?,
            to: parse_square(&token[2..])?,
        }),
        _ => Ok(Command::Unknown(token.to_string())),
    }
}

/// Parse `move <from> <to>`, also accepting `move e2e4`.
fn parse_move(tokens: &[&str]) -> Result<Command, CliError> {
    match tokens {
        [] => Err(CliError::MissingArgument {
            command: "move",
            what: "source square",
        }),
        [joined] if joined.len() == 4 && joined.is_char_boundary(2) => Ok(Command::Move {
            from: parse_square(&joined[..2])?,
            to: parse_square(&joined[2..])?,
        }),
        [_] => Err(CliError::MissingArgument {
            command: "move",
            what: "destination square",
        }),
        [from, to, ..] => Ok(Command::Move {
            from: parse_square(from)?,
            to: parse_square(to)?,
        }),
    }
}

/// Parse `set <board|markers> <on|off>`.
fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let name = tokens.first().ok_or(CliError::MissingArgument {
        command: "set",
        what: "option name",
    })?;
    let value = tokens.get(1).ok_or(CliError::MissingArgument {
        command: "set",
        what: "on or off",
    })?;
    let enabled = match *value {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => {
            return Err(CliError::InvalidOption {
                text: tokens.join(" "),
            });
        }
    };

    match name.to_ascii_lowercase().as_str() {
        "board" => Ok(Command::Set(SessionOption::ShowBoard(enabled))),
        "markers" => Ok(Command::Set(SessionOption::ShowMarkers(enabled))),
        _ => Err(CliError::InvalidOption {
            text: tokens.join(" "),
        }),
    }
}

/// A file letter followed by a digit, without range checking.
fn looks_like_square(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_digit()
}

fn parse_square(token: &str) -> Result<Square, CliError> {
    Square::from_algebraic(token).ok_or_else(|| CliError::InvalidSquare {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_square() {
        assert_eq!(parse_command("e2").unwrap(), Command::Select(Square::E2));
    }

    #[test]
    fn parse_select_keyword() {
        assert_eq!(parse_command("select g8").unwrap(), Command::Select(Square::G8));
    }

    #[test]
    fn parse_select_missing_square() {
        assert!(matches!(
            parse_command("select"),
            Err(CliError::MissingArgument { command: "select", .. })
        ));
    }

    #[test]
    fn parse_joined_move() {
        assert_eq!(
            parse_command("e2e4").unwrap(),
            Command::Move { from: Square::E2, to: Square::E4 }
        );
    }

    #[test]
    fn parse_move_keyword() {
        assert_eq!(
            parse_command("move g1 f3").unwrap(),
            Command::Move { from: Square::G1, to: Square::F3 }
        );
        assert_eq!(
            parse_command("move b8c6").unwrap(),
            Command::Move { from: Square::B8, to: Square::C6 }
        );
    }

    #[test]
    fn parse_move_missing_destination() {
        assert!(matches!(
            parse_command("move e2"),
            Err(CliError::MissingArgument { command: "move", .. })
        ));
    }

    #[test]
    fn parse_off_board_square() {
        assert!(matches!(parse_command("i9"), Err(CliError::InvalidSquare { .. })));
        assert!(matches!(parse_command("e2e9"), Err(CliError::InvalidSquare { .. })));
    }

    #[test]
    fn parse_simple_keywords() {
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("new").unwrap(), Command::New);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_set_options() {
        assert_eq!(
            parse_command("set board off").unwrap(),
            Command::Set(SessionOption::ShowBoard(false))
        );
        assert_eq!(
            parse_command("set Markers on").unwrap(),
            Command::Set(SessionOption::ShowMarkers(true))
        );
    }

    #[test]
    fn parse_set_invalid() {
        assert!(matches!(parse_command("set board maybe"), Err(CliError::InvalidOption { .. })));
        assert!(matches!(parse_command("set colour on"), Err(CliError::InvalidOption { .. })));
        assert!(matches!(parse_command("set"), Err(CliError::MissingArgument { .. })));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(parse_command("castle").unwrap(), Command::Unknown("castle".to_string()));
        assert_eq!(parse_command("foo bar").unwrap(), Command::Unknown("foo".to_string()));
    }

    #[test]
    fn parse_empty_line() {
        assert_eq!(parse_command("   ").unwrap(), Command::Unknown(String::new()));
    }
}
