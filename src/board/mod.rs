//! Board representation, move generation, rules, notation, evaluation,
//! and search.

mod error;
mod eval;
mod fen;
mod game;
mod make_unmake;
mod movegen;
mod san;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use game::GameResult;
pub use search::{find_best_move, Difficulty};
pub use state::{Board, UnmakeInfo};
pub use types::{Color, Move, MoveFlag, MoveList, Piece, ScoredMove, ScoredMoveList, Square};

pub(crate) use types::{
    castle_bit, CASTLE_ALL, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
    PROMOTION_PIECES,
};
