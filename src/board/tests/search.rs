//! Search behavior tests.

use crate::board::{find_best_move, Board, Difficulty, Square};

#[test]
fn test_difficulty_depths() {
    assert_eq!(Difficulty::Easy.depth(), 2);
    assert_eq!(Difficulty::Medium.depth(), 3);
    assert_eq!(Difficulty::Hard.depth(), 4);
}

#[test]
fn test_search_is_deterministic() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let mut first = Board::from_fen(fen);
    let mut second = Board::from_fen(fen);
    assert_eq!(find_best_move(&mut first, 3), find_best_move(&mut second, 3));
}

#[test]
fn test_search_restores_position() {
    let mut board = Board::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    );
    let before = board.to_fen();
    find_best_move(&mut board, 3);
    assert_eq!(board.to_fen(), before);
}

#[test]
fn test_no_move_when_mated() {
    // Fool's mate: White is checkmated, nothing to search.
    let mut board =
        Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(board.is_checkmate());
    assert_eq!(find_best_move(&mut board, 2), None);
}

#[test]
fn test_no_move_when_stalemated() {
    let mut board = Board::from_fen("k7/8/1Q6/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(find_best_move(&mut board, 2), None);
}

#[test]
fn test_finds_hanging_queen() {
    // Black queen on d5 is free to take.
    let mut board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let best = find_best_move(&mut board, 2).expect("search found no move");
    assert_eq!(best.to, Square(4, 3));
}

#[test]
fn test_finds_mate_in_one() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let best = find_best_move(&mut board, 2).expect("search found no move");
    let info = board.make_move(best);
    assert!(board.is_checkmate());
    board.unmake_move(best, info);
}

#[test]
fn test_finds_mate_on_fifty_move_boundary() {
    // The mating rook move pushes the half-move clock to 100; the
    // resulting position is checkmate, not a fifty-move draw, and the
    // search must not score it as 0 and wander off.
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 99 80");
    let best = find_best_move(&mut board, 2).expect("search found no move");
    let info = board.make_move(best);
    assert!(board.is_checkmate(), "expected mate, got {best}");
    board.unmake_move(best, info);
}

#[test]
fn test_prefers_faster_mate() {
    // Back-rank mate in one is available; a deeper search must still
    // pick it over slower mating lines.
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/2R3K1 w - - 0 1");
    let best = find_best_move(&mut board, 4).expect("search found no move");
    let info = board.make_move(best);
    assert!(board.is_checkmate(), "expected mate in one, got {best}");
    board.unmake_move(best, info);
}

#[test]
fn test_takes_the_bigger_piece() {
    // The knight can win either the undefended rook or a defended pawn.
    let mut board = Board::from_fen("4k3/8/8/3r1p2/8/4N3/8/4K3 w - - 0 1");
    let best = find_best_move(&mut board, 2).expect("search found no move");
    assert_eq!(best.to, Square(4, 3));
}

#[test]
fn test_quiescence_sees_recapture() {
    // The e5 pawn is defended by the d6 pawn. Without quiescence a
    // depth-1 search would grab it and never see the recapture.
    let mut board = Board::from_fen("4k3/8/3p4/4p3/3Q4/8/8/4K3 w - - 0 1");
    let best = find_best_move(&mut board, 1).expect("search found no move");
    assert_ne!(
        (best.from, best.to),
        (Square(3, 3), Square(4, 4)),
        "queen took a defended pawn"
    );
}
