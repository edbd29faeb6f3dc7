//! Core chess rules: board state, piece geometry, attack detection, legal
//! destinations, castling, and checkmate/stalemate detection.

mod address;
mod attacks;
mod board;
mod castle_rights;
mod color;
mod error;
mod game;
mod make_move;
mod movegen;
mod outcome;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod square_list;

pub use address::{
    Axis, PawnAddresses, Ray, king_addresses, knight_addresses, nearest_blockers, pawn_addresses,
    sliding_addresses,
};
pub use attacks::AttackDetector;
pub use board::{Board, BoardBuilder, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use color::Color;
pub use error::{BoardError, MoveError};
pub use game::Game;
pub use movegen::{has_legal_move, legal_destinations};
pub use outcome::{TurnResult, evaluate};
pub use perft::{divide, legal_moves, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use square_list::SquareList;
