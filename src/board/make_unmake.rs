//! Applying and reversing moves.
//!
//! `make_move` assumes the move came from this board's own move
//! generator; it performs no re-validation and will corrupt state if
//! handed an unreachable move. Calls must be strictly paired: make,
//! make, ..., unmake, unmake, in LIFO order.

use super::{
    Board, Color, Move, MoveFlag, Piece, Square, UnmakeInfo, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

/// Rank of the pawn removed by an en-passant capture: one rank behind the
/// destination square, from the mover's point of view.
#[inline]
fn en_passant_capture_square(to: Square, mover: Color) -> Square {
    let rank = (to.0 as isize - mover.pawn_direction()) as usize;
    Square(rank, to.1)
}

/// Castling rights revoked when a move touches `sq`. Matching on the
/// square rather than the piece also revokes rights when a rook is
/// captured in place.
#[inline]
const fn rights_cleared_by_square(sq: Square) -> u8 {
    match (sq.0, sq.1) {
        (0, 0) => CASTLE_WHITE_Q,
        (0, 7) => CASTLE_WHITE_K,
        (7, 0) => CASTLE_BLACK_Q,
        (7, 7) => CASTLE_BLACK_K,
        _ => 0,
    }
}

impl Board {
    /// Apply a legal move, returning the snapshot needed to reverse it.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let color = self.side_to_move();

        let mut info = UnmakeInfo {
            captured_piece_info: None,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };

        // Resolve and remove the captured piece. For en passant the
        // captured pawn is not on the destination square.
        match m.flag {
            MoveFlag::EnPassant => {
                let capture_sq = en_passant_capture_square(m.to, color);
                info.captured_piece_info = self.piece_at(capture_sq);
                debug_assert_eq!(
                    info.captured_piece_info,
                    Some((color.opponent(), Piece::Pawn)),
                    "en passant without a pawn to capture"
                );
                self.remove_piece(capture_sq);
            }
            MoveFlag::CastleKingside | MoveFlag::CastleQueenside => {}
            _ => {
                info.captured_piece_info = self.piece_at(m.to);
                if info.captured_piece_info.is_some() {
                    self.remove_piece(m.to);
                }
            }
        }

        let (_, moving_piece) = self.piece_at(m.from).expect("make_move: 'from' square empty");
        self.remove_piece(m.from);

        // Promotion substitutes the placed piece.
        let placed_piece = m.promotion().unwrap_or(moving_piece);
        self.set_piece(m.to, color, placed_piece);

        // Rook relocation for castling.
        match m.flag {
            MoveFlag::CastleKingside => {
                let rank = m.to.0;
                let rook = self
                    .piece_at(Square(rank, 7))
                    .expect("castling without a rook");
                self.remove_piece(Square(rank, 7));
                self.set_piece(Square(rank, 5), rook.0, rook.1);
            }
            MoveFlag::CastleQueenside => {
                let rank = m.to.0;
                let rook = self
                    .piece_at(Square(rank, 0))
                    .expect("castling without a rook");
                self.remove_piece(Square(rank, 0));
                self.set_piece(Square(rank, 3), rook.0, rook.1);
            }
            _ => {}
        }

        // En passant target exists only for the single reply to a double
        // pawn push, on the bypassed square.
        self.en_passant_target = if m.is_double_pawn_push() {
            Some(Square((m.from.0 + m.to.0) / 2, m.from.1))
        } else {
            None
        };

        // Castling rights: a king move revokes both of the mover's flags;
        // any move from or onto a rook origin square revokes that flag.
        if moving_piece == Piece::King {
            let both = match color {
                Color::White => CASTLE_WHITE_K | CASTLE_WHITE_Q,
                Color::Black => CASTLE_BLACK_K | CASTLE_BLACK_Q,
            };
            self.castling_rights &= !both;
        }
        self.castling_rights &= !rights_cleared_by_square(m.from);
        self.castling_rights &= !rights_cleared_by_square(m.to);

        if moving_piece == Piece::Pawn || info.captured_piece_info.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if color == Color::Black {
            self.fullmove_number += 1;
        }

        self.white_to_move = !self.white_to_move;

        let fp = self.fingerprint();
        self.repetition_log.push(fp);

        info
    }

    /// Reverse the most recent `make_move`, restoring every field of the
    /// position exactly.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.repetition_log
            .pop()
            .expect("unmake_move: fingerprint log empty");

        self.white_to_move = !self.white_to_move;
        let color = self.side_to_move();

        // A promotion reconstitutes the moved piece as a pawn before
        // repositioning it.
        let (_, piece_at_to) = self
            .piece_at(m.to)
            .expect("unmake_move: 'to' square empty");
        self.remove_piece(m.to);
        let original_piece = if m.is_promotion() {
            Piece::Pawn
        } else {
            piece_at_to
        };
        self.set_piece(m.from, color, original_piece);

        // Restore the captured piece, at the en-passant square if that was
        // the capture type.
        if m.is_en_passant() {
            if let Some((cap_color, cap_piece)) = info.captured_piece_info {
                let capture_sq = en_passant_capture_square(m.to, color);
                self.set_piece(capture_sq, cap_color, cap_piece);
            }
        } else if let Some((cap_color, cap_piece)) = info.captured_piece_info {
            self.set_piece(m.to, cap_color, cap_piece);
        }

        // Reverse the rook relocation for castling.
        match m.flag {
            MoveFlag::CastleKingside => {
                let rank = m.to.0;
                let rook = self
                    .piece_at(Square(rank, 5))
                    .expect("unmake castling: rook missing");
                self.remove_piece(Square(rank, 5));
                self.set_piece(Square(rank, 7), rook.0, rook.1);
            }
            MoveFlag::CastleQueenside => {
                let rank = m.to.0;
                let rook = self
                    .piece_at(Square(rank, 3))
                    .expect("unmake castling: rook missing");
                self.remove_piece(Square(rank, 3));
                self.set_piece(Square(rank, 0), rook.0, rook.1);
            }
            _ => {}
        }

        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
    }
}
