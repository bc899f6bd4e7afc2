//! Static evaluation: material plus piece-square tables.
//!
//! The tables are the widely used "simplified evaluation" values. Each is
//! written from White's point of view with rank 8 as the first row, so
//! White squares index with a flipped rank and Black squares index
//! directly.

use super::{Board, Color, Piece, Square};

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MIDDLEGAME_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_ENDGAME_TABLE: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-50,-50,
];

/// Total non-king material below which the king tables switch from the
/// middlegame to the endgame shape. Roughly "each side has at most a rook
/// and a minor piece left".
const ENDGAME_MATERIAL_THRESHOLD: i32 = 2600;

#[inline]
fn pst_index(sq: Square, color: Color) -> usize {
    match color {
        Color::White => (7 - sq.0) * 8 + sq.1,
        Color::Black => sq.0 * 8 + sq.1,
    }
}

impl Board {
    /// Static evaluation in centipawns, relative to the side to move.
    /// Positive is good for the mover.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut white_score = 0;
        let mut non_king_material = 0;

        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if let Some((_, piece)) = self.piece_at(sq) {
                if piece != Piece::King {
                    non_king_material += piece.value();
                }
            }
        }
        let endgame = non_king_material < ENDGAME_MATERIAL_THRESHOLD;

        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let Some((color, piece)) = self.piece_at(sq) else {
                continue;
            };

            let positional = match piece {
                Piece::Pawn => PAWN_TABLE[pst_index(sq, color)],
                Piece::Knight => KNIGHT_TABLE[pst_index(sq, color)],
                Piece::Bishop => BISHOP_TABLE[pst_index(sq, color)],
                Piece::Rook => ROOK_TABLE[pst_index(sq, color)],
                Piece::Queen => QUEEN_TABLE[pst_index(sq, color)],
                Piece::King => {
                    if endgame {
                        KING_ENDGAME_TABLE[pst_index(sq, color)]
                    } else {
                        KING_MIDDLEGAME_TABLE[pst_index(sq, color)]
                    }
                }
            };

            let material = if piece == Piece::King { 0 } else { piece.value() };
            white_score += color.sign() * (material + positional);
        }

        self.side_to_move().sign() * white_score
    }
}
