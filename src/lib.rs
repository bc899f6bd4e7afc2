//! A chess rules engine with a fixed-depth adversarial search.
//!
//! The [`board`] module owns the rules of the game: position state, legal
//! move generation, make/unmake, draw detection, FEN, SAN, evaluation, and
//! the negamax search. The [`engine`] module wraps the search in a
//! background worker for interactive play.
//!
//! ```no_run
//! use caissa::board::{Board, Difficulty, find_best_move};
//!
//! let mut board = Board::new();
//! if let Some(m) = find_best_move(&mut board, Difficulty::Medium.depth()) {
//!     let san = board.play(m);
//!     println!("engine plays {san}");
//! }
//! ```

pub mod board;
pub mod engine;

pub use board::{Board, Color, Difficulty, GameResult, Move, Piece, Square};
pub use engine::EngineController;
