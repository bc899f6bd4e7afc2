//! FEN parsing and serialization, plus coordinate ("e2e4") move parsing.

use std::str::FromStr;

use super::{
    castle_bit, Board, Color, FenError, Move, MoveParseError, Piece, Square,
};

impl Board {
    /// Parse a FEN string. The half-move clock and full-move number fields
    /// are optional and default to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();

        // Piece placement, rank 8 down to rank 1.
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::TooManyFiles { rank, files: file + 1 });
                    }
                    board.set_piece(Square(rank, file), color, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank, files: file });
            }
        }

        board.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = 0;
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let bit = match c {
                    'K' => castle_bit(Color::White, 'K'),
                    'Q' => castle_bit(Color::White, 'Q'),
                    'k' => castle_bit(Color::Black, 'K'),
                    'q' => castle_bit(Color::Black, 'Q'),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                board.castling_rights |= bit;
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(Square::from_str(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?)
        };

        board.halfmove_clock = parts
            .get(4)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        board.fullmove_number = parts
            .get(5)
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);

        let fp = board.fingerprint();
        board.repetition_log.push(fp);
        Ok(board)
    }

    /// Parse a FEN string, panicking on malformed input. Intended for
    /// known-good literals; use [`Board::try_from_fen`] for untrusted input.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Board::try_from_fen(fen).expect("invalid FEN")
    }

    /// Serialize the position as a full six-field FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.fingerprint(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation ("e2e4", "e7e8q") and resolve it
    /// against the legal moves of the current position.
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if notation.len() < 4 || notation.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: notation.len(),
            });
        }

        let from = Square::from_str(&notation[0..2]).map_err(|_| MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        })?;
        let to = Square::from_str(&notation[2..4]).map_err(|_| MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        })?;

        let promotion = match notation.chars().nth(4) {
            None => None,
            Some(c) => match c.to_ascii_lowercase() {
                'q' => Some(Piece::Queen),
                'r' => Some(Piece::Rook),
                'b' => Some(Piece::Bishop),
                'n' => Some(Piece::Knight),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        let moves = self.generate_moves();
        moves
            .iter()
            .find(|m| m.from == from && m.to == to && m.promotion() == promotion)
            .copied()
            .ok_or(MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse and play a coordinate-notation move, returning its SAN string.
    pub fn make_move_uci(&mut self, notation: &str) -> Result<String, MoveParseError> {
        let m = self.parse_move(notation)?;
        Ok(self.play(m))
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
