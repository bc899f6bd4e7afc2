//! Attack detection, independent of move generation.
//!
//! `is_square_attacked` re-derives, for a target square, whether any enemy
//! piece of each type could move to it. It never calls the move generator
//! (the move generator's legality filter calls it, and that would recurse).

use super::{Board, Color, Piece, Square, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};

impl Board {
    /// Is `square` attacked by any piece of `attacker_color`?
    pub(crate) fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        // Pawns: the attack direction is reversed relative to movement.
        // A square is attacked by a pawn sitting one rank behind it (from
        // the attacker's point of view) on an adjacent file.
        let pawn_dr = -attacker_color.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = square.offset(pawn_dr, df) {
                if self.piece_at(sq) == Some((attacker_color, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(sq) = square.offset(dr, df) {
                if self.piece_at(sq) == Some((attacker_color, Piece::Knight)) {
                    return true;
                }
            }
        }

        for (dr, df) in KING_OFFSETS {
            if let Some(sq) = square.offset(dr, df) {
                if self.piece_at(sq) == Some((attacker_color, Piece::King)) {
                    return true;
                }
            }
        }

        // Sliders: ray-cast outward and test the first blocking piece.
        if self.ray_hits(square, attacker_color, &ROOK_DIRECTIONS, Piece::Rook) {
            return true;
        }
        if self.ray_hits(square, attacker_color, &BISHOP_DIRECTIONS, Piece::Bishop) {
            return true;
        }

        false
    }

    /// Walk each ray from `square`; true if the first occupied square
    /// holds an enemy queen or the given slider type.
    fn ray_hits(
        &self,
        square: Square,
        attacker_color: Color,
        directions: &[(isize, isize)],
        slider: Piece,
    ) -> bool {
        for &(dr, df) in directions {
            let mut current = square;
            while let Some(next) = current.offset(dr, df) {
                match self.piece_at(next) {
                    None => current = next,
                    Some((color, piece)) => {
                        if color == attacker_color && (piece == slider || piece == Piece::Queen) {
                            return true;
                        }
                        break;
                    }
                }
            }
        }
        false
    }

    /// Locate the king of the given color.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if self.piece_at(sq) == Some((color, Piece::King)) {
                return Some(sq);
            }
        }
        None
    }

    /// Is the given color's king currently attacked?
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.find_king(color) {
            self.is_square_attacked(king_sq, color.opponent())
        } else {
            false
        }
    }
}
