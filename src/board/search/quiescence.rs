//! Quiescence search: extend the search through capture sequences so the
//! leaf evaluation is never taken in the middle of an exchange.

use super::super::Board;
use super::move_order::order_moves;
use super::SearchStats;

/// Search only captures and promotions until the position is quiet.
///
/// The stand-pat score lets the mover decline further captures, so the
/// recursion is bounded by the number of pieces on the board and no
/// explicit depth cap is needed.
pub(crate) fn quiesce(board: &mut Board, mut alpha: i32, beta: i32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    let stand_pat = board.evaluate();
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let tactical = board.generate_tactical_moves();
    let ordered = order_moves(board, &tactical);

    for scored in ordered.iter() {
        let m = scored.mv;
        let info = board.make_move(m);
        let score = -quiesce(board, -beta, -alpha, stats);
        board.unmake_move(m, info);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
