//! Core value types for the board.

mod castling;
mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveFlag, MoveList, ScoredMove, ScoredMoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::{
    castle_bit, CASTLE_ALL, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
pub(crate) use piece::PROMOTION_PIECES;
