//! Standard Algebraic Notation output.

use super::{Board, Move, MoveFlag, Piece};

impl Board {
    /// Encode a legal move of the current position in SAN, including
    /// minimal disambiguation and a `+`/`#` suffix. The move must have come
    /// from this position's move generator.
    #[must_use]
    pub fn move_to_san(&mut self, m: Move) -> String {
        let mut san = match m.flag {
            MoveFlag::CastleKingside => "O-O".to_string(),
            MoveFlag::CastleQueenside => "O-O-O".to_string(),
            _ => {
                let (_, piece) = self
                    .piece_at(m.from)
                    .expect("move_to_san: 'from' square empty");
                let mut s = String::new();

                if piece == Piece::Pawn {
                    if m.is_capture() {
                        s.push((m.from.1 as u8 + b'a') as char);
                    }
                } else {
                    s.push(piece.to_char().to_ascii_uppercase());
                    let (needs_file, needs_rank) = self.needs_disambiguation(m, piece);
                    if needs_file {
                        s.push((m.from.1 as u8 + b'a') as char);
                    }
                    if needs_rank {
                        s.push((m.from.0 as u8 + b'1') as char);
                    }
                }

                if m.is_capture() {
                    s.push('x');
                }
                s.push_str(&m.to.to_string());

                if let Some(promo) = m.promotion() {
                    s.push('=');
                    s.push(promo.to_char().to_ascii_uppercase());
                }
                s
            }
        };

        // Probe the resulting position for check and checkmate.
        let info = self.make_move(m);
        if self.is_in_check(self.side_to_move()) {
            san.push(if self.is_checkmate() { '#' } else { '+' });
        }
        self.unmake_move(m, info);

        san
    }

    /// Whether other pieces of the same type could also reach `m.to`, and
    /// which coordinate resolves the ambiguity. SAN prefers the file; the
    /// rank is used when the ambiguous pieces share a file; both when
    /// neither alone is unique.
    fn needs_disambiguation(&mut self, m: Move, piece: Piece) -> (bool, bool) {
        let mut same_file = false;
        let mut same_rank = false;
        let mut ambiguous = false;

        let moves = self.generate_moves();
        for other in moves.iter() {
            if other.to != m.to || other.from == m.from {
                continue;
            }
            if self.piece_on(other.from) != Some(piece) {
                continue;
            }
            ambiguous = true;
            if other.from.1 == m.from.1 {
                same_file = true;
            }
            if other.from.0 == m.from.0 {
                same_rank = true;
            }
        }

        if !ambiguous {
            (false, false)
        } else if !same_file {
            (true, false)
        } else if !same_rank {
            (false, true)
        } else {
            (true, true)
        }
    }
}
