//! Pseudo-legal and legal move generation.
//!
//! Moves are generated pseudo-legally per piece type, then filtered by
//! applying each move and rejecting those that leave the mover's own king
//! attacked. Attack detection lives in `attacks.rs` and is derived
//! independently of move generation.

mod attacks;
mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveFlag, MoveList, Piece, Square};

/// Knight jump offsets as (rank delta, file delta).
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King step offsets as (rank delta, file delta).
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Build a move, resolving the captured piece from the board.
    pub(crate) fn create_move(&self, from: Square, to: Square, flag: MoveFlag) -> Move {
        let captured = match flag {
            MoveFlag::EnPassant => Some(Piece::Pawn),
            MoveFlag::CastleKingside | MoveFlag::CastleQueenside => None,
            _ => self.piece_at(to).map(|(_, piece)| piece),
        };
        Move {
            from,
            to,
            flag,
            captured,
        }
    }

    pub(crate) fn generate_pseudo_moves(&self) -> MoveList {
        let color = self.side_to_move();
        let mut moves = MoveList::new();

        for idx in 0..64 {
            let from = Square::from_index(idx);
            let Some((piece_color, piece)) = self.piece_at(from) else {
                continue;
            };
            if piece_color != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop => self.generate_slider_moves(from, &BISHOP_DIRECTIONS, &mut moves),
                Piece::Rook => self.generate_slider_moves(from, &ROOK_DIRECTIONS, &mut moves),
                Piece::Queen => self.generate_slider_moves(from, &QUEEN_DIRECTIONS, &mut moves),
                Piece::King => self.generate_king_moves(from, &mut moves),
            }
        }

        moves
    }

    /// Generate all legal moves for the side to move.
    ///
    /// This is the only source of truth for "what can be played now":
    /// every pseudo-legal move is applied, tested for leaving the mover's
    /// king in check, and reverted. Castling is additionally rejected when
    /// the king's start, transit, or destination square is attacked.
    pub fn generate_moves(&mut self) -> MoveList {
        let mover = self.side_to_move();
        let opponent = mover.opponent();
        let pseudo_moves = self.generate_pseudo_moves();
        let mut legal_moves = MoveList::new();

        for m in pseudo_moves.iter() {
            if m.is_castling() {
                let transit = Square(m.from.0, (m.from.1 + m.to.1) / 2);
                if self.is_square_attacked(m.from, opponent)
                    || self.is_square_attacked(transit, opponent)
                    || self.is_square_attacked(m.to, opponent)
                {
                    continue;
                }
            }

            let info = self.make_move(*m);
            if !self.is_in_check(mover) {
                legal_moves.push(*m);
            }
            self.unmake_move(*m, info);
        }
        legal_moves
    }

    /// Generate legal captures and promotions only, for quiescence search.
    pub(crate) fn generate_tactical_moves(&mut self) -> MoveList {
        let mover = self.side_to_move();
        let pseudo_moves = self.generate_pseudo_moves();
        let mut tactical_moves = MoveList::new();

        for m in pseudo_moves.iter() {
            if !m.is_tactical() {
                continue;
            }
            let info = self.make_move(*m);
            if !self.is_in_check(mover) {
                tactical_moves.push(*m);
            }
            self.unmake_move(*m, info);
        }
        tactical_moves
    }

    /// Checkmate: no legal moves and the side to move is in check.
    pub fn is_checkmate(&mut self) -> bool {
        let color = self.side_to_move();
        self.is_in_check(color) && self.generate_moves().is_empty()
    }

    /// Stalemate: no legal moves and the side to move is not in check.
    pub fn is_stalemate(&mut self) -> bool {
        let color = self.side_to_move();
        !self.is_in_check(color) && self.generate_moves().is_empty()
    }

    /// Count leaf positions reachable by legal moves, for move-generation
    /// correctness oracles.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            let info = self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.unmake_move(*m, info);
        }

        nodes
    }
}
