//! Board state: piece placement, side to move, castling rights, clocks,
//! and the position-fingerprint log used for repetition detection.

use std::fmt;

use super::{Color, Piece, Square, CASTLE_ALL};

/// Snapshot of the auxiliary state clobbered by a move, returned by
/// `make_move` and consumed by `unmake_move`. The recursion stack of the
/// search is the LIFO undo log.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: u8,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

/// A chess position.
///
/// The board is a 64-entry mailbox indexed `rank * 8 + file`. Exactly one
/// king of each color is present at all times during normal play; the
/// engine does not defend against external corruption.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) white_to_move: bool,
    pub(crate) castling_rights: u8,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    /// Fingerprint of every position reached, including the current one
    /// (always the last entry). Pushed by `make_move`, popped by
    /// `unmake_move`, truncated only by a reset.
    pub(crate) repetition_log: Vec<String>,
    /// SAN strings of the moves played via `play`, for display.
    pub(crate) move_log: Vec<String>,
}

impl Board {
    /// Create a board set up in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            white_to_move: true,
            castling_rights: 0,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            repetition_log: Vec::new(),
            move_log: Vec::new(),
        }
    }

    /// Reset to the standard starting position, discarding all history.
    pub fn reset(&mut self) {
        self.squares = [None; 64];
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            self.set_piece(Square(0, file), Color::White, *piece);
            self.set_piece(Square(7, file), Color::Black, *piece);
            self.set_piece(Square(1, file), Color::White, Piece::Pawn);
            self.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }

        self.white_to_move = true;
        self.castling_rights = CASTLE_ALL;
        self.en_passant_target = None;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
        self.repetition_log.clear();
        self.move_log.clear();
        let fp = self.fingerprint();
        self.repetition_log.push(fp);
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) {
        self.squares[sq.index()] = None;
    }

    /// Get the piece and color on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn is_empty_square(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// Half-moves since the last pawn move or capture (fifty-move rule).
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Full-move counter, starting at 1 and incremented after Black moves.
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// En passant target square, if the last move was a double pawn push.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Canonical fingerprint of the position: piece placement, side to
    /// move, castling rights, and en-passant square. The half-move and
    /// full-move counters are deliberately excluded so that repetition is
    /// detected independently of them. Two positions are "the same" for
    /// threefold-repetition purposes iff their fingerprints are equal.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut fp = String::with_capacity(80);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        fp.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    fp.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                fp.push((b'0' + empty) as char);
            }
            if rank > 0 {
                fp.push('/');
            }
        }

        fp.push(' ');
        fp.push(if self.white_to_move { 'w' } else { 'b' });
        fp.push(' ');
        fp.push_str(&self.castling_string());
        fp.push(' ');
        match self.en_passant_target {
            Some(sq) => fp.push_str(&sq.to_string()),
            None => fp.push('-'),
        }
        fp
    }

    pub(crate) fn castling_string(&self) -> String {
        use super::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};
        let mut castling = String::new();
        if self.castling_rights & CASTLE_WHITE_K != 0 {
            castling.push('K');
        }
        if self.castling_rights & CASTLE_WHITE_Q != 0 {
            castling.push('Q');
        }
        if self.castling_rights & CASTLE_BLACK_K != 0 {
            castling.push('k');
        }
        if self.castling_rights & CASTLE_BLACK_Q != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        castling
    }

    /// Fifty-move rule: 100 plies without a pawn move or capture.
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Threefold repetition: the current position's fingerprint appears at
    /// least three times in the history, counting the current occurrence.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        let current = match self.repetition_log.last() {
            Some(fp) => fp,
            None => return false,
        };
        self.repetition_log.iter().filter(|fp| *fp == current).count() >= 3
    }

    /// Insufficient mating material.
    ///
    /// Flags exactly: K vs K, K+minor vs K, and KB vs KB with both bishops
    /// on same-colored squares. Nothing else is treated as automatically
    /// drawn; in particular K+NN vs K is not flagged.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors: Vec<(Color, Piece, Square)> = Vec::new();

        for idx in 0..64 {
            let sq = Square::from_index(idx);
            match self.piece_at(sq) {
                None => {}
                Some((_, Piece::King)) => {}
                Some((color, piece)) if piece.is_minor() => {
                    if minors.len() == 2 {
                        return false;
                    }
                    minors.push((color, piece, sq));
                }
                // Any pawn, rook, or queen is mating material.
                Some(_) => return false,
            }
        }

        match minors.as_slice() {
            [] => true,
            [_] => true,
            [(c1, Piece::Bishop, sq1), (c2, Piece::Bishop, sq2)] => {
                c1 != c2 && sq1.is_light() == sq2.is_light()
            }
            _ => false,
        }
    }

    /// Any draw condition other than stalemate.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_threefold_repetition() || self.is_insufficient_material()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => write!(f, "{} ", piece.to_fen_char(color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
