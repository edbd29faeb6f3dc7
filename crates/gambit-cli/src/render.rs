//! Text rendering of the board and game status.

use std::fmt;

use gambit_core::{Board, Game, Piece, Square, SquareList, TurnResult};

/// Wrapper for printing a board with selected destinations marked.
///
/// Empty destinations show as `*`, capturable pieces as `x`.
pub struct MarkedBoard<'a> {
    board: &'a Board,
    markers: &'a SquareList,
}

impl<'a> MarkedBoard<'a> {
    /// Mark `markers` on `board`.
    pub fn new(board: &'a Board, markers: &'a SquareList) -> MarkedBoard<'a> {
        MarkedBoard { board, markers }
    }
}

impl fmt::Display for MarkedBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = match Square::new(file, rank) {
                    Some(sq) if self.markers.contains(sq) => {
                        if self.board.is_occupied(sq) { 'x' } else { '*' }
                    }
                    Some(sq) => self.board.piece_on(sq).map_or('.', Piece::symbol),
                    None => '?',
                };
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// One-line status for the side to move.
pub fn status_line(game: &Game) -> String {
    match game.outcome() {
        TurnResult::Continue if game.is_in_check() => {
            format!("{} to move, in check", game.side_to_move())
        }
        TurnResult::Continue => format!("{} to move", game.side_to_move()),
        terminal => terminal.to_string(),
    }
}

/// Space-separated destination list, e.g. `e3 e4`.
pub fn destination_list(destinations: &SquareList) -> String {
    destinations
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
