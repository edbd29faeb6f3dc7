//! Perft: legal move tree node counts, for validating the rules.

use crate::board::Board;
use crate::movegen::legal_destinations;
use crate::square::Square;

/// Every legal `(from, to)` pair for the side to move.
pub fn legal_moves(board: &Board) -> Vec<(Square, Square)> {
    board
        .pieces_of(board.side_to_move())
        .flat_map(|(from, _)| {
            legal_destinations(board, from)
                .iter()
                .map(move |&to| (from, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves without applying them.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|(from, to)| perft(&board.make_move(from, to), depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown.
///
/// Returns `("e2e4", nodes)` style pairs sorted alphabetically.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(board)
        .into_iter()
        .map(|(from, to)| {
            let count = if depth <= 1 { 1 } else { perft(&board.make_move(from, to), depth - 1) };
            (format!("{from}{to}"), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_0() {
        assert_eq!(perft(&Board::starting_position(), 0), 1);
    }

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Board::starting_position(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Board::starting_position(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Board::starting_position(), 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Board::starting_position(), 4), 197_281);
    }

    #[test]
    fn divide_startpos_depth_1() {
        let results = divide(&Board::starting_position(), 1);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, count)| *count == 1));
        assert_eq!(results[0].0, "a2a3");
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::starting_position();
        let total: u64 = divide(&board, 2).iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&board, 2));
    }
}
