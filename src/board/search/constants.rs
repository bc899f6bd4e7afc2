//! Search scoring constants.

/// Window bound for alpha-beta; larger in magnitude than any real score.
pub(crate) const INF: i32 = 30_000;

/// Base score for checkmate. Mates found fewer plies from the root score
/// closer to `INF`, so the search prefers the fastest mate.
pub(crate) const MATE_SCORE: i32 = 29_000;

/// Ordering bonus for promotions, ahead of most captures.
pub(crate) const PROMOTION_BONUS: i32 = 800;
