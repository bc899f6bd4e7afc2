use super::super::PROMOTION_PIECES;
use super::{Board, MoveFlag, MoveList, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let dir = color.pawn_direction();
        let start_rank = color.pawn_start_rank();
        let promotion_rank = color.pawn_promotion_rank();

        // Forward pushes. A single push is blocked by any occupant; the
        // double push also needs the intermediate square empty.
        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty_square(forward) {
                if forward.0 == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(self.create_move(from, forward, MoveFlag::Promotion(promo)));
                    }
                } else {
                    moves.push(self.create_move(from, forward, MoveFlag::Quiet));
                    if from.0 == start_rank {
                        if let Some(double) = from.offset(2 * dir, 0) {
                            if self.is_empty_square(double) {
                                moves.push(self.create_move(
                                    from,
                                    double,
                                    MoveFlag::DoublePawnPush,
                                ));
                            }
                        }
                    }
                }
            }
        }

        // Diagonal captures, onto an enemy piece or the en-passant target.
        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            if let Some((target_color, _)) = self.piece_at(target) {
                if target_color != color {
                    if target.0 == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(self.create_move(from, target, MoveFlag::Promotion(promo)));
                        }
                    } else {
                        moves.push(self.create_move(from, target, MoveFlag::Quiet));
                    }
                }
            } else if Some(target) == self.en_passant_target {
                moves.push(self.create_move(from, target, MoveFlag::EnPassant));
            }
        }
    }
}
