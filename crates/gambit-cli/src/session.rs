//! The interactive session: read a line, run it against the game, print the result.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Game, Square, SquareList};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::CliError;
use crate::render::{MarkedBoard, destination_list, status_line};

const HELP: &str = "\
commands:
  e2 | select e2        show the legal destinations of the piece on e2
  e2e4 | move e2 e4     play a move
  board                 print the board
  new                   start a new game
  set board on|off      reprint the board after every move
  set markers on|off    mark destinations on the board when selecting
  help                  show this text
  quit                  leave";

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Reprint the board after every move.
    pub show_board: bool,
    /// Print a marked board when a square is selected.
    pub show_markers: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_markers: true,
        }
    }
}

/// A terminal session holding one game.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session with a new game and default settings.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with a new game and the given settings.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current settings.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// Bad commands and refused moves are reported on `out` and the loop
    /// carries on; only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        info!("session started");
        self.print_board(out)?;
        writeln!(out, "{}", status_line(&self.game))?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let outcome = parse_command(trimmed).and_then(|cmd| self.execute(cmd, out));
            match outcome {
                Ok(true) => break,
                Ok(false) => {}
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(out, "error: {e}")?;
                }
            }
        }

        info!(moves = self.game.move_count(), "session ended");
        Ok(())
    }

    /// Execute one command. Returns `true` when the session should end.
    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<bool, CliError> {
        match cmd {
            Command::Select(sq) => self.handle_select(sq, out)?,
            Command::Move { from, to } => self.handle_move(from, to, out)?,
            Command::Board => {
                self.print_board(out)?;
                writeln!(out, "{}", status_line(&self.game))?;
            }
            Command::New => {
                self.game = Game::new();
                info!("new game");
                self.print_board(out)?;
                writeln!(out, "{}", status_line(&self.game))?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Set(option) => self.handle_set(option),
            Command::Quit => return Ok(true),
            Command::Unknown(word) => {
                warn!(%word, "unknown command");
                writeln!(out, "unknown command: {word} (try 'help')")?;
            }
        }
        Ok(false)
    }

    fn handle_select<W: Write>(&self, sq: Square, out: &mut W) -> Result<(), CliError> {
        let destinations = self.game.select_square(sq);
        if destinations.is_empty() {
            writeln!(out, "{sq}: no legal moves")?;
            return Ok(());
        }
        if self.config.show_markers {
            writeln!(out, "{}", MarkedBoard::new(self.game.board(), &destinations))?;
        }
        writeln!(out, "{sq}: {}", destination_list(&destinations))?;
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, from: Square, to: Square, out: &mut W) -> Result<(), CliError> {
        self.game.play(from, to)?;
        if self.config.show_board {
            self.print_board(out)?;
        }
        writeln!(out, "{}", status_line(&self.game))?;
        Ok(())
    }

    fn handle_set(&mut self, option: SessionOption) {
        match option {
            SessionOption::ShowBoard(on) => self.config.show_board = on,
            SessionOption::ShowMarkers(on) => self.config.show_markers = on,
        }
        debug!(config = ?self.config, "settings changed");
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        writeln!(out, "{}", MarkedBoard::new(self.game.board(), &SquareList::new()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn select_lists_destinations() {
        let mut session = Session::new();
        let out = run_script(&mut session, "set markers off\ng1\ne4\n");
        assert!(out.contains("g1: f3 h3"));
        assert!(out.contains("e4: no legal moves"));
    }

    #[test]
    fn moves_advance_the_game() {
        let mut session = Session::with_config(SessionConfig {
            show_board: false,
            show_markers: false,
        });
        let out = run_script(&mut session, "e2e4\nmove e7 e5\n");
        assert_eq!(session.game().move_count(), 2);
        assert!(out.contains("Black to move"));
        assert!(out.trim_end().ends_with("White to move"));
    }

    #[test]
    fn errors_do_not_end_session() {
        let mut session = Session::new();
        let out = run_script(&mut session, "e2e5\nz9\nfrobnicate\ne2e4\n");
        assert!(out.contains("error: e2 to e5 is not a legal move"));
        assert!(out.contains("error: invalid square: z9"));
        assert!(out.contains("unknown command: frobnicate"));
        assert_eq!(session.game().move_count(), 1);
    }

    #[test]
    fn fools_mate_reports_checkmate_and_stops_play() {
        let mut session = Session::new();
        let out = run_script(&mut session, "f2f3\ne7e5\ng2g4\nd8h4\na2a3\n");
        assert!(out.contains("checkmate, Black wins"));
        assert!(out.contains("error: the game is over"));
        assert_eq!(session.game().move_count(), 4);
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = Session::new();
        run_script(&mut session, "quit\ne2e4\n");
        assert_eq!(session.game().move_count(), 0);
    }

    #[test]
    fn new_resets_game() {
        let mut session = Session::new();
        run_script(&mut session, "e2e4\nnew\n");
        assert_eq!(session.game().move_count(), 0);
    }

    #[test]
    fn set_updates_config() {
        let mut session = Session::new();
        run_script(&mut session, "set board off\nset markers off\n");
        assert_eq!(
            session.config(),
            SessionConfig {
                show_board: false,
                show_markers: false,
            }
        );
    }
}
