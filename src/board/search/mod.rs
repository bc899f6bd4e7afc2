//! Fixed-depth negamax search with alpha-beta pruning and quiescence.

mod constants;
mod move_order;
mod quiescence;

use log::{debug, info};

use super::{Board, Move};
use constants::{INF, MATE_SCORE};
use move_order::order_moves;
use quiescence::quiesce;

/// Playing strength, expressed as search depth in plies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth for this difficulty.
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// Counters accumulated over one search.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SearchStats {
    pub(crate) nodes: u64,
}

/// Negamax with alpha-beta pruning. Scores are always from the point of
/// view of the side to move at the node.
fn negamax(board: &mut Board, depth: u32, mut alpha: i32, beta: i32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    // Checkmate outranks the draw rules, same as game_result: a mate
    // delivered on the fifty-move boundary is still a mate.
    if board.is_draw() {
        if board.is_checkmate() {
            return -(MATE_SCORE + depth as i32);
        }
        return 0;
    }
    if depth == 0 {
        return quiesce(board, alpha, beta, stats);
    }

    let moves = board.generate_moves();
    if moves.is_empty() {
        // More remaining depth means the mate is closer to the root, so
        // its score is worse for the mated side and faster mates win.
        if board.is_in_check(board.side_to_move()) {
            return -(MATE_SCORE + depth as i32);
        }
        return 0;
    }

    let ordered = order_moves(board, &moves);

    for scored in ordered.iter() {
        let m = scored.mv;
        let info = board.make_move(m);
        let score = -negamax(board, depth - 1, -beta, -alpha, stats);
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

/// Search the position to the given depth and return the best move, or
/// `None` when the side to move has no legal moves.
///
/// Given the same position and depth, the result is deterministic: ties
/// are broken in favor of the first move encountered in ordering.
#[must_use]
pub fn find_best_move(board: &mut Board, depth: u32) -> Option<Move> {
    let depth = depth.max(1);
    let moves = board.generate_moves();
    if moves.is_empty() {
        return None;
    }

    let mut stats = SearchStats::default();
    let ordered = order_moves(board, &moves);

    let mut best_move = None;
    let mut alpha = -INF;

    for scored in ordered.iter() {
        let m = scored.mv;
        let info = board.make_move(m);
        let score = -negamax(board, depth - 1, -INF, -alpha, &mut stats);
        board.unmake_move(m, info);

        debug!("root move {m}: score {score}");

        if score > alpha || best_move.is_none() {
            alpha = score;
            best_move = Some(m);
        }
    }

    info!(
        "searched depth {depth}: best {} (score {alpha}, {} nodes)",
        best_move.map_or_else(|| "-".to_string(), |m| m.to_string()),
        stats.nodes
    );

    best_move
}
