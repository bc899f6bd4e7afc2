//! Move ordering for alpha-beta efficiency.

use super::super::{Board, MoveList, Piece, ScoredMoveList};
use super::constants::PROMOTION_BONUS;

/// Score moves for ordering: captures by MVV-LVA (most valuable victim,
/// least valuable attacker), promotions with a flat bonus, quiet moves
/// last in generation order.
pub(crate) fn order_moves(board: &Board, moves: &MoveList) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();

    for m in moves.iter() {
        let mut score = 0;

        if let Some(victim) = m.captured {
            let attacker = board.piece_on(m.from).unwrap_or(Piece::Pawn);
            score += victim.value() * 10 - attacker.value();
        }
        if m.is_promotion() {
            score += PROMOTION_BONUS;
        }

        scored.push(*m, score);
    }

    scored.sort_by_score_desc();
    scored
}
