use super::super::castle_bit;
use super::{Board, MoveFlag, MoveList, Piece, Square, KING_OFFSETS};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        for (dr, df) in KING_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            if self.color_on(to) != Some(color) {
                moves.push(self.create_move(from, to, MoveFlag::Quiet));
            }
        }

        // Castling needs the right intact, the squares between king and
        // rook empty, and the rook still on its origin square. The
        // attacked-square conditions (king may not castle out of, through,
        // or into check) are enforced by the legality filter.
        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) {
            return;
        }

        if self.castling_rights & castle_bit(color, 'K') != 0
            && self.is_empty_square(Square(back_rank, 5))
            && self.is_empty_square(Square(back_rank, 6))
            && self.piece_at(Square(back_rank, 7)) == Some((color, Piece::Rook))
        {
            moves.push(self.create_move(from, Square(back_rank, 6), MoveFlag::CastleKingside));
        }
        if self.castling_rights & castle_bit(color, 'Q') != 0
            && self.is_empty_square(Square(back_rank, 1))
            && self.is_empty_square(Square(back_rank, 2))
            && self.is_empty_square(Square(back_rank, 3))
            && self.piece_at(Square(back_rank, 0)) == Some((color, Piece::Rook))
        {
            moves.push(self.create_move(from, Square(back_rank, 2), MoveFlag::CastleQueenside));
        }
    }
}
