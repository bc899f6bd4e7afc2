//! Game-level play: applying moves with history, and terminal detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameResult::Stalemate => write!(f, "Draw by stalemate"),
            GameResult::FiftyMoveRule => write!(f, "Draw by fifty-move rule"),
            GameResult::ThreefoldRepetition => write!(f, "Draw by threefold repetition"),
            GameResult::InsufficientMaterial => write!(f, "Draw by insufficient material"),
        }
    }
}

impl Board {
    /// Play a legal move permanently, recording its SAN string in the move
    /// history. Unlike `make_move`, a played move is not meant to be
    /// reversed.
    pub fn play(&mut self, m: Move) -> String {
        let san = self.move_to_san(m);
        self.make_move(m);
        self.move_log.push(san.clone());
        san
    }

    /// SAN strings of every move played via [`Board::play`].
    #[must_use]
    pub fn move_history(&self) -> &[String] {
        &self.move_log
    }

    /// Terminal state of the current position, if the game is over.
    ///
    /// Checkmate and stalemate are checked before the draw rules, so a
    /// position that is both mate and (say) a fifty-move draw counts as
    /// mate.
    #[must_use]
    pub fn game_result(&mut self) -> Option<GameResult> {
        let has_legal_moves = !self.generate_moves().is_empty();

        if !has_legal_moves {
            if self.is_in_check(self.side_to_move()) {
                return Some(GameResult::Checkmate {
                    winner: self.side_to_move().opponent(),
                });
            }
            return Some(GameResult::Stalemate);
        }

        if self.is_fifty_move_draw() {
            return Some(GameResult::FiftyMoveRule);
        }
        if self.is_threefold_repetition() {
            return Some(GameResult::ThreefoldRepetition);
        }
        if self.is_insufficient_material() {
            return Some(GameResult::InsufficientMaterial);
        }
        None
    }

    #[must_use]
    pub fn is_game_over(&mut self) -> bool {
        self.game_result().is_some()
    }
}
